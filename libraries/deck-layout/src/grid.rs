//! Breakpoint and column model
//!
//! Static description of the responsive grid: the pixel threshold at which
//! each breakpoint starts and how many columns it offers.

use deck_core::Breakpoint;

/// Pixel height of one grid row
pub const ROW_HEIGHT: u32 = 60;

/// Horizontal and vertical gap between cells, in pixels
pub const MARGIN: [u32; 2] = [12, 12];

/// Thresholds and column counts per breakpoint
///
/// Both arrays are indexed by [`Breakpoint::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    thresholds: [u32; 5],
    columns: [u32; 5],
}

impl Default for GridModel {
    fn default() -> Self {
        Self {
            thresholds: [1200, 996, 768, 480, 0],
            columns: [12, 10, 6, 4, 2],
        }
    }
}

impl GridModel {
    /// Build a model from explicit tables, widest breakpoint first
    pub fn new(thresholds: [u32; 5], columns: [u32; 5]) -> Self {
        Self {
            thresholds,
            columns,
        }
    }

    /// Number of columns at a breakpoint
    pub fn columns(&self, breakpoint: Breakpoint) -> u32 {
        self.columns[breakpoint.index()]
    }

    /// Minimum viewport width for a breakpoint
    pub fn threshold(&self, breakpoint: Breakpoint) -> u32 {
        self.thresholds[breakpoint.index()]
    }

    /// Widest breakpoint whose threshold fits in `width`
    pub fn breakpoint_for_width(&self, width: u32) -> Breakpoint {
        Breakpoint::ALL
            .into_iter()
            .find(|bp| self.threshold(*bp) <= width)
            .unwrap_or(Breakpoint::Xxs)
    }

    /// Column ratio of `breakpoint` relative to the reference breakpoint
    ///
    /// `None` when the reference breakpoint has no columns.
    pub fn scale(&self, breakpoint: Breakpoint) -> Option<f64> {
        let reference = self.columns(Breakpoint::REFERENCE);
        if reference == 0 {
            return None;
        }
        Some(f64::from(self.columns(breakpoint)) / f64::from(reference))
    }
}
