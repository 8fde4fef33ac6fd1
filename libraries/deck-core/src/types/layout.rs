/// Grid placement types
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Breakpoint, ModuleId};

/// Position and size of one module on the grid, in cell units
///
/// Intervals are half-open: a rect covers columns `[x, x + w)` and rows
/// `[y, y + h)`, so rects that only share an edge do not overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRect {
    /// Module placed by this rect
    #[serde(alias = "i")]
    pub id: ModuleId,
    /// Left column
    pub x: u32,
    /// Top row
    pub y: u32,
    /// Width in columns
    pub w: u32,
    /// Height in rows
    pub h: u32,
    /// Lower bound for `w` in resize operations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_w: Option<u32>,
    /// Lower bound for `h` in resize operations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_h: Option<u32>,
}

impl PlacementRect {
    /// Create a rect without size minimums
    pub fn new(id: impl Into<ModuleId>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
            min_w: None,
            min_h: None,
        }
    }

    /// Attach size minimums
    #[must_use]
    pub fn with_min(mut self, min_w: u32, min_h: u32) -> Self {
        self.min_w = Some(min_w);
        self.min_h = Some(min_h);
        self
    }

    /// Exclusive right edge
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// Smallest width any resize may produce (never below 1)
    pub fn min_width(&self) -> u32 {
        self.min_w.unwrap_or(1).max(1)
    }

    /// Smallest height any resize may produce (never below 1)
    pub fn min_height(&self) -> u32 {
        self.min_h.unwrap_or(1).max(1)
    }

    /// Whether the column spans of both rects intersect
    pub fn x_overlaps(&self, other: &Self) -> bool {
        self.x < other.right() && other.x < self.right()
    }

    /// Whether the row spans of both rects intersect
    pub fn y_overlaps(&self, other: &Self) -> bool {
        self.y < other.bottom() && other.y < self.bottom()
    }

    /// Whether both rects cover at least one common cell
    pub fn collides_with(&self, other: &Self) -> bool {
        self.x_overlaps(other) && self.y_overlaps(other)
    }
}

/// Placements for every breakpoint
///
/// Rect order within a breakpoint carries no meaning; it is kept stable so
/// serialized layouts diff cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutSet(BTreeMap<Breakpoint, Vec<PlacementRect>>);

impl LayoutSet {
    /// Create an empty layout set
    pub fn new() -> Self {
        Self::default()
    }

    /// Rects placed at a breakpoint, if that breakpoint has an entry
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&[PlacementRect]> {
        self.0.get(&breakpoint).map(Vec::as_slice)
    }

    /// Replace the rects of a breakpoint
    pub fn insert(&mut self, breakpoint: Breakpoint, rects: Vec<PlacementRect>) {
        self.0.insert(breakpoint, rects);
    }

    /// Remove and return the rects of a breakpoint
    pub fn remove(&mut self, breakpoint: Breakpoint) -> Option<Vec<PlacementRect>> {
        self.0.remove(&breakpoint)
    }

    /// Rect of a module at a breakpoint
    pub fn rect(&self, breakpoint: Breakpoint, id: &ModuleId) -> Option<&PlacementRect> {
        self.get(breakpoint)?.iter().find(|rect| &rect.id == id)
    }

    /// Iterate breakpoints with their rects, widest breakpoint first
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &[PlacementRect])> {
        self.0.iter().map(|(bp, rects)| (*bp, rects.as_slice()))
    }

    /// Whether no breakpoint has an entry
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Breakpoint, Vec<PlacementRect>)> for LayoutSet {
    fn from_iter<I: IntoIterator<Item = (Breakpoint, Vec<PlacementRect>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for LayoutSet {
    type Item = (Breakpoint, Vec<PlacementRect>);
    type IntoIter = std::collections::btree_map::IntoIter<Breakpoint, Vec<PlacementRect>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
