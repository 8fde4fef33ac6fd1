//! Collision resolver
//!
//! Removes overlaps by pushing rects downward. Rects are settled in
//! `(y, x)` order; each one that collides with an already settled rect drops
//! below every settled rect sharing one of its columns. Nothing moves up or
//! sideways and sizes are never changed.

use deck_core::{LayoutSet, PlacementRect};
use tracing::debug;

/// Resolve overlaps independently at every breakpoint
pub fn resolve_collisions(layout: &LayoutSet) -> LayoutSet {
    layout
        .iter()
        .map(|(bp, rects)| {
            let resolved = resolve_rects(rects);
            let moved = rects
                .iter()
                .zip(&resolved)
                .filter(|(before, after)| before.y != after.y)
                .count();
            if moved > 0 {
                debug!(breakpoint = %bp, moved, "Pushed colliding rects down");
            }
            (bp, resolved)
        })
        .collect()
}

/// Resolve overlaps within one breakpoint
///
/// The output keeps the input order; only `y` values change. Ties in
/// `(y, x)` are settled in input order.
pub fn resolve_rects(rects: &[PlacementRect]) -> Vec<PlacementRect> {
    let mut order: Vec<usize> = (0..rects.len()).collect();
    order.sort_by_key(|&i| (rects[i].y, rects[i].x));

    let mut resolved = rects.to_vec();
    let mut placed: Vec<usize> = Vec::with_capacity(rects.len());

    for index in order {
        let mut rect = resolved[index].clone();

        // A push lands below every settled rect in the same columns, so the
        // loop settles after one push; the bound only guarantees termination.
        for _ in 0..=placed.len() {
            let blocked = placed
                .iter()
                .any(|&other| resolved[other].collides_with(&rect));
            if !blocked {
                break;
            }

            let floor = placed
                .iter()
                .map(|&other| &resolved[other])
                .filter(|other| other.x_overlaps(&rect))
                .map(PlacementRect::bottom)
                .max()
                .unwrap_or(rect.y);
            rect.y = rect.y.max(floor);
        }

        resolved[index] = rect;
        placed.push(index);
    }

    resolved
}
