/// Responsive breakpoint tags
use serde::{Deserialize, Serialize};

/// Named viewport-width tier
///
/// Variants are declared widest first, so the derived `Ord` matches the
/// descending pixel thresholds and `BTreeMap<Breakpoint, _>` iterates
/// `lg, md, sm, xs, xxs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Desktop, 12 columns
    Lg,
    /// Small desktop or landscape tablet
    Md,
    /// Tablet
    Sm,
    /// Large phone
    Xs,
    /// Phone
    Xxs,
}

impl Breakpoint {
    /// Every breakpoint, widest first
    pub const ALL: [Breakpoint; 5] = [Self::Lg, Self::Md, Self::Sm, Self::Xs, Self::Xxs];

    /// Breakpoint that logical module sizes are expressed against
    pub const REFERENCE: Breakpoint = Self::Lg;

    /// Position in [`Breakpoint::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lg => "lg",
            Self::Md => "md",
            Self::Sm => "sm",
            Self::Xs => "xs",
            Self::Xxs => "xxs",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "lg" => Some(Self::Lg),
            "md" => Some(Self::Md),
            "sm" => Some(Self::Sm),
            "xs" => Some(Self::Xs),
            "xxs" => Some(Self::Xxs),
            _ => None,
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
