//! Size-override resolver and grid bounds
//!
//! Logical sizes are stored in reference-breakpoint units and projected onto
//! each breakpoint through its column scale, so a module made wide on a large
//! screen shrinks proportionally instead of overflowing a narrow one.

use deck_core::{Breakpoint, LayoutSet, ModuleSizeConfig, PlacementRect, SizeMap};
use tracing::debug;

use crate::grid::GridModel;

fn scaled(value: u32, scale: f64) -> u32 {
    let projected = (f64::from(value) * scale).round();
    if projected <= 0.0 {
        0
    } else if projected >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        projected as u32
    }
}

fn fit_width(w: u32, rect: &PlacementRect, columns: u32) -> u32 {
    // Column bound wins over minW when they conflict.
    w.max(rect.min_width()).min(columns)
}

/// Project logical size overrides onto every breakpoint
///
/// Widths are clamped to `[max(1, minW), columns]`, heights to at least
/// `max(1, minH)`. A rect whose new width would overflow the grid is pulled
/// left; it never moves right and never moves vertically. Breakpoints
/// without a usable scale or with no columns pass through unchanged.
pub fn apply_size_overrides(layout: &LayoutSet, sizes: &SizeMap, grid: &GridModel) -> LayoutSet {
    layout
        .iter()
        .map(|(bp, rects)| {
            let columns = grid.columns(bp);
            let rects = match grid.scale(bp) {
                Some(scale) if columns > 0 && !sizes.is_empty() => rects
                    .iter()
                    .map(|rect| match sizes.get(&rect.id) {
                        Some(size) => resize(rect, size, scale, columns),
                        None => rect.clone(),
                    })
                    .collect(),
                _ => rects.to_vec(),
            };
            (bp, rects)
        })
        .collect()
}

fn resize(rect: &PlacementRect, size: &ModuleSizeConfig, scale: f64, columns: u32) -> PlacementRect {
    let mut next = rect.clone();

    if let Some(w) = size.w {
        next.w = fit_width(scaled(w, scale), rect, columns);
        if next.right() > columns {
            next.x = columns.saturating_sub(next.w);
        }
    }

    if let Some(h) = size.h {
        next.h = scaled(h, scale).max(rect.min_height());
    }

    next
}

/// Force every rect inside the grid and above its minimums
///
/// Widths land in `[max(1, minW), columns]`, heights at or above
/// `max(1, minH)`, and overflowing rects are pulled left.
pub fn clamp_to_grid(layout: &LayoutSet, grid: &GridModel) -> LayoutSet {
    layout
        .iter()
        .map(|(bp, rects)| {
            let columns = grid.columns(bp);
            let mut clamped = 0usize;
            let rects: Vec<PlacementRect> = rects
                .iter()
                .map(|rect| {
                    if columns == 0 {
                        return rect.clone();
                    }
                    let mut next = rect.clone();
                    next.w = fit_width(rect.w, rect, columns);
                    next.h = rect.h.max(rect.min_height());
                    if next.right() > columns {
                        next.x = columns - next.w;
                    }
                    if &next != rect {
                        clamped += 1;
                    }
                    next
                })
                .collect();

            if clamped > 0 {
                debug!(breakpoint = %bp, clamped, "Pulled rects back inside the grid");
            }
            (bp, rects)
        })
        .collect()
}

/// Convert concrete sizes at `breakpoint` back into logical sizes
///
/// Used after a free-form resize so the new size regenerates consistently on
/// other breakpoints. Returns an empty map when the breakpoint has no usable
/// scale.
pub fn derive_size_configs(layout: &LayoutSet, breakpoint: Breakpoint, grid: &GridModel) -> SizeMap {
    let Some(scale) = grid.scale(breakpoint).filter(|s| *s > 0.0) else {
        return SizeMap::new();
    };
    let Some(rects) = layout.get(breakpoint) else {
        return SizeMap::new();
    };

    rects
        .iter()
        .map(|rect| {
            let size = ModuleSizeConfig {
                w: Some(scaled(rect.w, 1.0 / scale).max(1)),
                h: Some(scaled(rect.h, 1.0 / scale).max(1)),
            };
            (rect.id.clone(), size)
        })
        .collect()
}

/// Logical sizes for the modules whose size differs between two layouts
///
/// Only rects present in both layouts at `breakpoint` with a different `w`
/// or `h` are considered resized; moves alone produce nothing.
pub fn derive_resized_configs(
    previous: &LayoutSet,
    next: &LayoutSet,
    breakpoint: Breakpoint,
    grid: &GridModel,
) -> SizeMap {
    let Some(rects) = next.get(breakpoint) else {
        return SizeMap::new();
    };

    let resized: Vec<PlacementRect> = rects
        .iter()
        .filter(|rect| {
            previous
                .rect(breakpoint, &rect.id)
                .is_some_and(|before| before.w != rect.w || before.h != rect.h)
        })
        .cloned()
        .collect();

    if resized.is_empty() {
        return SizeMap::new();
    }

    let mut only_resized = LayoutSet::new();
    only_resized.insert(breakpoint, resized);
    derive_size_configs(&only_resized, breakpoint, grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::ModuleId;

    fn single(bp: Breakpoint, rect: PlacementRect) -> LayoutSet {
        let mut layout = LayoutSet::new();
        layout.insert(bp, vec![rect]);
        layout
    }

    fn sizes(id: &str, w: Option<u32>, h: Option<u32>) -> SizeMap {
        let mut map = SizeMap::new();
        map.insert(ModuleId::new(id), ModuleSizeConfig { w, h });
        map
    }

    #[test]
    fn width_scales_with_columns() {
        let grid = GridModel::default();
        let layout = single(Breakpoint::Sm, PlacementRect::new("library", 0, 0, 3, 5));

        let out = apply_size_overrides(&layout, &sizes("library", Some(4), Some(4)), &grid);
        let rect = &out.get(Breakpoint::Sm).unwrap()[0];
        assert_eq!((rect.w, rect.h), (2, 2));
    }

    #[test]
    fn width_respects_min_width() {
        let grid = GridModel::default();
        let layout = single(
            Breakpoint::Sm,
            PlacementRect::new("library", 0, 0, 3, 5).with_min(3, 4),
        );

        let out = apply_size_overrides(&layout, &sizes("library", Some(4), Some(4)), &grid);
        let rect = &out.get(Breakpoint::Sm).unwrap()[0];
        assert_eq!((rect.w, rect.h), (3, 4));
    }

    #[test]
    fn width_is_capped_at_columns_and_pulled_left() {
        let grid = GridModel::default();
        let layout = single(Breakpoint::Lg, PlacementRect::new("library", 8, 3, 4, 5));

        let out = apply_size_overrides(&layout, &sizes("library", Some(40), None), &grid);
        let rect = &out.get(Breakpoint::Lg).unwrap()[0];
        assert_eq!((rect.x, rect.y, rect.w, rect.h), (0, 3, 12, 5));
    }

    #[test]
    fn partial_overflow_only_shifts_as_needed() {
        let grid = GridModel::default();
        let layout = single(Breakpoint::Lg, PlacementRect::new("library", 7, 0, 4, 5));

        let out = apply_size_overrides(&layout, &sizes("library", Some(6), None), &grid);
        let rect = &out.get(Breakpoint::Lg).unwrap()[0];
        assert_eq!((rect.x, rect.w), (6, 6));
    }

    #[test]
    fn rects_without_override_pass_through() {
        let grid = GridModel::default();
        let rect = PlacementRect::new("sidebar", 11, 0, 9, 2);
        let layout = single(Breakpoint::Lg, rect.clone());

        let out = apply_size_overrides(&layout, &sizes("library", Some(2), None), &grid);
        assert_eq!(out.get(Breakpoint::Lg).unwrap()[0], rect);
    }

    #[test]
    fn degenerate_scale_is_a_no_op() {
        let grid = GridModel::new([1200, 996, 768, 480, 0], [0, 10, 6, 4, 2]);
        let layout = single(Breakpoint::Md, PlacementRect::new("library", 0, 0, 3, 3));

        let out = apply_size_overrides(&layout, &sizes("library", Some(8), Some(8)), &grid);
        assert_eq!(out, layout);
        assert!(derive_size_configs(&layout, Breakpoint::Md, &grid).is_empty());
    }

    #[test]
    fn clamp_pulls_overflowing_rects_inside() {
        let grid = GridModel::default();
        let layout = single(Breakpoint::Xs, PlacementRect::new("library", 3, 2, 9, 0).with_min(2, 3));

        let out = clamp_to_grid(&layout, &grid);
        let rect = &out.get(Breakpoint::Xs).unwrap()[0];
        assert_eq!((rect.x, rect.y, rect.w, rect.h), (0, 2, 4, 3));
    }

    #[test]
    fn clamp_leaves_valid_rects_alone() {
        let grid = GridModel::default();
        let layout = single(Breakpoint::Lg, PlacementRect::new("library", 2, 0, 7, 10).with_min(3, 4));
        assert_eq!(clamp_to_grid(&layout, &grid), layout);
    }

    #[test]
    fn derive_inverts_projection() {
        let grid = GridModel::default();
        let layout = single(Breakpoint::Sm, PlacementRect::new("library", 0, 0, 2, 3));

        let derived = derive_size_configs(&layout, Breakpoint::Sm, &grid);
        assert_eq!(
            derived[&ModuleId::new("library")],
            ModuleSizeConfig { w: Some(4), h: Some(6) }
        );

        let projected = apply_size_overrides(&layout, &derived, &grid);
        let rect = &projected.get(Breakpoint::Sm).unwrap()[0];
        assert_eq!((rect.w, rect.h), (2, 3));
    }

    #[test]
    fn only_resized_modules_are_derived() {
        let grid = GridModel::default();
        let mut before = LayoutSet::new();
        before.insert(
            Breakpoint::Md,
            vec![
                PlacementRect::new("library", 0, 0, 5, 10),
                PlacementRect::new("sidebar", 5, 0, 2, 10),
            ],
        );
        let mut after = LayoutSet::new();
        after.insert(
            Breakpoint::Md,
            vec![
                PlacementRect::new("library", 0, 0, 5, 5),
                PlacementRect::new("sidebar", 7, 3, 2, 10),
            ],
        );

        let derived = derive_resized_configs(&before, &after, Breakpoint::Md, &grid);
        assert_eq!(derived.len(), 1);
        assert_eq!(
            derived[&ModuleId::new("library")],
            ModuleSizeConfig { w: Some(6), h: Some(6) }
        );
    }

    #[test]
    fn width_only_resize_also_fixes_logical_height() {
        let grid = GridModel::default();
        let before = single(
            Breakpoint::Lg,
            PlacementRect::new("library", 2, 0, 7, 10).with_min(3, 4),
        );
        let after = single(
            Breakpoint::Lg,
            PlacementRect::new("library", 2, 0, 9, 10).with_min(3, 4),
        );

        let sizes = derive_resized_configs(&before, &after, Breakpoint::Lg, &grid);
        assert_eq!(
            sizes[&ModuleId::new("library")],
            ModuleSizeConfig { w: Some(9), h: Some(10) }
        );

        // The height override scales with the column ratio like the width.
        let sm = single(
            Breakpoint::Sm,
            PlacementRect::new("library", 2, 0, 4, 10).with_min(3, 4),
        );
        let projected = apply_size_overrides(&sm, &sizes, &grid);
        let rect = &projected.get(Breakpoint::Sm).unwrap()[0];
        assert_eq!((rect.x, rect.w, rect.h), (1, 5, 5));
    }
}
