//! Property-based tests for the layout engine
//!
//! Uses proptest to verify the engine invariants across random layouts,
//! visibility sets and size overrides.

use std::collections::BTreeSet;

use deck_core::{
    Breakpoint, LayoutSet, ModuleConfig, ModuleId, ModuleSizeConfig, PlacementRect, SizeMap,
};
use deck_layout::{
    apply_size_overrides, modules, normalize, reconcile, registry, resolve_collisions, GridModel,
};
use proptest::prelude::*;

// ===== Helpers =====

fn registered_id() -> impl Strategy<Value = String> {
    prop::sample::select(
        registry::modules()
            .iter()
            .map(|def| def.id.to_string())
            .collect::<Vec<_>>(),
    )
}

fn arbitrary_rect() -> impl Strategy<Value = PlacementRect> {
    (
        registered_id(),
        0u32..14,                           // x
        0u32..40,                           // y
        1u32..14,                           // w
        1u32..12,                           // h
        proptest::option::of((1u32..=2, 1u32..=4)), // minimums
    )
        .prop_map(|(id, x, y, w, h, min)| {
            let rect = PlacementRect::new(id.as_str(), x, y, w, h);
            match min {
                Some((min_w, min_h)) => rect.with_min(min_w, min_h),
                None => rect,
            }
        })
}

fn arbitrary_layouts() -> impl Strategy<Value = LayoutSet> {
    prop::collection::vec(
        proptest::option::of(prop::collection::vec(arbitrary_rect(), 0..12)),
        5,
    )
    .prop_map(|per_breakpoint| {
        Breakpoint::ALL
            .into_iter()
            .zip(per_breakpoint)
            .filter_map(|(bp, rects)| rects.map(|rects| (bp, rects)))
            .collect()
    })
}

fn arbitrary_configs() -> impl Strategy<Value = Vec<ModuleConfig>> {
    prop::collection::vec(any::<bool>(), registry::modules().len()).prop_map(|flags| {
        modules::merge(None)
            .into_iter()
            .zip(flags)
            .map(|(mut config, visible)| {
                config.is_visible = visible;
                config
            })
            .collect()
    })
}

fn arbitrary_sizes() -> impl Strategy<Value = SizeMap> {
    prop::collection::btree_map(
        registered_id().prop_map(|id| ModuleId::new(id.as_str())),
        (proptest::option::of(1u32..20), proptest::option::of(1u32..20))
            .prop_filter("empty size config", |(w, h)| w.is_some() || h.is_some())
            .prop_map(|(w, h)| ModuleSizeConfig { w, h }),
        0..5,
    )
}

fn ids_at(layout: &LayoutSet, bp: Breakpoint) -> Vec<ModuleId> {
    layout
        .get(bp)
        .unwrap_or_default()
        .iter()
        .map(|rect| rect.id.clone())
        .collect()
}

fn overlapping_pair(rects: &[PlacementRect]) -> Option<(PlacementRect, PlacementRect)> {
    for (i, a) in rects.iter().enumerate() {
        for b in &rects[i + 1..] {
            if a.collides_with(b) {
                return Some((a.clone(), b.clone()));
            }
        }
    }
    None
}

// ===== Property Tests =====

proptest! {
    /// Property: normalizing twice equals normalizing once
    #[test]
    fn normalize_is_idempotent(layouts in arbitrary_layouts(), configs in arbitrary_configs()) {
        let once = normalize(&layouts, &configs);
        let twice = normalize(&once, &configs);
        prop_assert_eq!(once, twice);
    }

    /// Property: every breakpoint holds exactly the visible modules, once each
    #[test]
    fn normalize_matches_visible_set(layouts in arbitrary_layouts(), configs in arbitrary_configs()) {
        let visible = modules::visible_ids(&configs);
        let out = normalize(&layouts, &configs);

        for bp in Breakpoint::ALL {
            let ids = ids_at(&out, bp);
            let unique: BTreeSet<ModuleId> = ids.iter().cloned().collect();
            prop_assert_eq!(ids.len(), unique.len(), "duplicate ids at {}", bp);
            prop_assert_eq!(&unique, &visible, "membership mismatch at {}", bp);
        }
    }

    /// Property: surviving rects keep their geometry through normalization
    #[test]
    fn normalize_preserves_geometry(layouts in arbitrary_layouts(), configs in arbitrary_configs()) {
        let out = normalize(&layouts, &configs);
        for (bp, rects) in out.iter() {
            let Some(input) = layouts.get(bp) else { continue };
            for rect in rects {
                if let Some(original) = input.iter().find(|r| r.id == rect.id) {
                    prop_assert_eq!(original, rect);
                }
            }
        }
    }

    /// Property: resolved breakpoints contain no overlapping pair
    #[test]
    fn collisions_leave_no_overlap(layouts in arbitrary_layouts()) {
        let out = resolve_collisions(&layouts);
        for (bp, rects) in out.iter() {
            let pair = overlapping_pair(rects);
            prop_assert!(pair.is_none(), "overlap at {}: {:?}", bp, pair);
        }
    }

    /// Property: rects only ever move down, never sideways or resized
    #[test]
    fn collisions_never_move_up(layouts in arbitrary_layouts()) {
        let out = resolve_collisions(&layouts);
        for (bp, rects) in out.iter() {
            let before = layouts.get(bp).unwrap();
            prop_assert_eq!(before.len(), rects.len());
            for (old, new) in before.iter().zip(rects) {
                prop_assert!(new.y >= old.y);
                prop_assert_eq!((old.x, old.w, old.h), (new.x, new.w, new.h));
            }
        }
    }

    /// Property: resolved width lies between minW and the column count
    #[test]
    fn size_override_width_is_clamped(
        bp in prop::sample::select(Breakpoint::ALL.to_vec()),
        x in 0u32..12,
        min_w in 1u32..=2,
        override_w in 1u32..40
    ) {
        let grid = GridModel::default();
        let mut layouts = LayoutSet::new();
        layouts.insert(bp, vec![PlacementRect::new("library", x, 0, 1, 1).with_min(min_w, 1)]);
        let mut sizes = SizeMap::new();
        sizes.insert(ModuleId::new("library"), ModuleSizeConfig { w: Some(override_w), h: None });

        let out = apply_size_overrides(&layouts, &sizes, &grid);
        let rect = &out.get(bp).unwrap()[0];
        let columns = grid.columns(bp);

        prop_assert!(rect.w >= min_w && rect.w <= columns, "w={} cols={}", rect.w, columns);
        prop_assert!(rect.x <= x, "x moved right");
        prop_assert_eq!(rect.y, 0);
    }

    /// Property: the full pipeline output satisfies every layout invariant
    #[test]
    fn reconcile_output_is_valid(
        layouts in arbitrary_layouts(),
        configs in arbitrary_configs(),
        sizes in arbitrary_sizes()
    ) {
        let grid = GridModel::default();
        let visible = modules::visible_ids(&configs);
        let out = reconcile(&layouts, &configs, &sizes, &grid);

        for bp in Breakpoint::ALL {
            let rects = out.get(bp).unwrap();
            let ids: BTreeSet<ModuleId> = rects.iter().map(|r| r.id.clone()).collect();
            prop_assert_eq!(&ids, &visible);
            prop_assert!(overlapping_pair(rects).is_none());
            for rect in rects {
                prop_assert!(rect.right() <= grid.columns(bp), "{:?} overflows {}", rect, bp);
                prop_assert!(rect.w >= rect.min_width());
                prop_assert!(rect.h >= rect.min_height());
            }
        }
    }

    /// Property: reconciling a reconciled layout changes nothing
    #[test]
    fn reconcile_is_stable(
        layouts in arbitrary_layouts(),
        configs in arbitrary_configs(),
        sizes in arbitrary_sizes()
    ) {
        let grid = GridModel::default();
        let once = reconcile(&layouts, &configs, &sizes, &grid);
        let twice = reconcile(&once, &configs, &sizes, &grid);
        prop_assert_eq!(once, twice);
    }
}
