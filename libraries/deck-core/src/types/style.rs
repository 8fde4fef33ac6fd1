/// Sparse per-module style and size overrides
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ModuleId;

/// Style overrides keyed by module
pub type StyleMap = BTreeMap<ModuleId, ModuleStyleConfig>;

/// Logical size overrides keyed by module
pub type SizeMap = BTreeMap<ModuleId, ModuleSizeConfig>;

/// Visual overrides for one module; absent fields inherit the theme
///
/// An entry whose every field is `None` must not be stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleStyleConfig {
    /// CSS background value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// CSS text color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Corner radius in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    /// In `[0, 1]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Font size in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// CSS font family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl ModuleStyleConfig {
    /// Whether no field overrides anything
    pub fn is_empty(&self) -> bool {
        self.background.is_none()
            && self.text_color.is_none()
            && self.border_radius.is_none()
            && self.opacity.is_none()
            && self.font_size.is_none()
            && self.font_family.is_none()
    }
}

/// Editable field of a [`ModuleStyleConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleField {
    /// [`ModuleStyleConfig::background`]
    Background,
    /// [`ModuleStyleConfig::text_color`]
    TextColor,
    /// [`ModuleStyleConfig::border_radius`]
    BorderRadius,
    /// [`ModuleStyleConfig::opacity`]
    Opacity,
    /// [`ModuleStyleConfig::font_size`]
    FontSize,
    /// [`ModuleStyleConfig::font_family`]
    FontFamily,
}

impl StyleField {
    /// Whether the field holds a number rather than free text
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::BorderRadius | Self::Opacity | Self::FontSize)
    }

    /// Name of the field as persisted
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::TextColor => "textColor",
            Self::BorderRadius => "borderRadius",
            Self::Opacity => "opacity",
            Self::FontSize => "fontSize",
            Self::FontFamily => "fontFamily",
        }
    }

    /// Parse from the persisted name
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "background" => Some(Self::Background),
            "textColor" => Some(Self::TextColor),
            "borderRadius" => Some(Self::BorderRadius),
            "opacity" => Some(Self::Opacity),
            "fontSize" => Some(Self::FontSize),
            "fontFamily" => Some(Self::FontFamily),
            _ => None,
        }
    }
}

/// Breakpoint-independent size, in columns/rows at the reference breakpoint
///
/// An entry with neither dimension set must not be stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSizeConfig {
    /// Width in reference columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    /// Height in reference rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
}

impl ModuleSizeConfig {
    /// Whether neither dimension is overridden
    pub fn is_empty(&self) -> bool {
        self.w.is_none() && self.h.is_none()
    }
}

/// Editable dimension of a [`ModuleSizeConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeDimension {
    /// [`ModuleSizeConfig::w`]
    Width,
    /// [`ModuleSizeConfig::h`]
    Height,
}
