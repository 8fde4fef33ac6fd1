/// Position of the floating module-manager panel
use serde::{Deserialize, Serialize};

/// Width/height pair in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extent {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Extent {
    /// Create a new extent
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Top-left corner of the manager panel, in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerPosition {
    /// Distance from the left edge
    pub x: i32,
    /// Distance from the top edge
    pub y: i32,
}

impl Default for ManagerPosition {
    fn default() -> Self {
        Self { x: 24, y: 80 }
    }
}

impl ManagerPosition {
    /// Create a new position
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Keep a `panel`-sized box at this position inside `viewport`
    ///
    /// When the panel is larger than the viewport it is pinned to the
    /// top-left corner.
    #[must_use]
    pub fn clamp_to(self, viewport: Extent, panel: Extent) -> Self {
        let max_x = i64::from(viewport.width) - i64::from(panel.width);
        let max_y = i64::from(viewport.height) - i64::from(panel.height);
        Self {
            x: i64::from(self.x).min(max_x).max(0) as i32,
            y: i64::from(self.y).min(max_y).max(0) as i32,
        }
    }
}
