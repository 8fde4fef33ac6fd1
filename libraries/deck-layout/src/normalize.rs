//! Layout normalizer
//!
//! Corrects membership only: after normalization every breakpoint holds
//! exactly one rect per visible module. Geometry of rects that survive is
//! passed through untouched.

use std::collections::BTreeSet;

use deck_core::{Breakpoint, LayoutSet, ModuleConfig, ModuleId, PlacementRect};
use tracing::debug;

use crate::modules::visible_ids;
use crate::registry;

/// Reconcile a layout set with the current module configuration
///
/// For each breakpoint: start from the input rects (or the registry defaults
/// when the breakpoint is missing), drop rects of hidden, unknown or
/// duplicated modules, then append the registry default for every visible
/// module still lacking a rect. Idempotent.
pub fn normalize(input: &LayoutSet, configs: &[ModuleConfig]) -> LayoutSet {
    let visible = visible_ids(configs);

    Breakpoint::ALL
        .into_iter()
        .map(|bp| (bp, normalize_breakpoint(input.get(bp), bp, &visible)))
        .collect()
}

fn normalize_breakpoint(
    input: Option<&[PlacementRect]>,
    breakpoint: Breakpoint,
    visible: &BTreeSet<ModuleId>,
) -> Vec<PlacementRect> {
    let source = match input {
        Some(rects) => rects.to_vec(),
        None => registry::default_rects(breakpoint),
    };

    let mut seen = BTreeSet::new();
    let mut rects: Vec<PlacementRect> = source
        .into_iter()
        .filter(|rect| visible.contains(&rect.id) && seen.insert(rect.id.clone()))
        .collect();

    let filtered = rects.len();
    for def in registry::modules() {
        let id = def.module_id();
        if visible.contains(&id) && !seen.contains(&id) {
            rects.push(def.default_rect(breakpoint));
        }
    }

    if rects.len() != filtered {
        debug!(
            breakpoint = %breakpoint,
            added = rects.len() - filtered,
            "Filled missing modules with default placements"
        );
    }

    rects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::{merge, set_visibility};
    use crate::registry::{LIBRARY, PLAYLIST, SIDEBAR};

    fn only_visible(ids: &[&str]) -> Vec<ModuleConfig> {
        merge(None)
            .into_iter()
            .map(|mut config| {
                config.is_visible = ids.contains(&config.id.as_str());
                config
            })
            .collect()
    }

    fn ids_at(layout: &LayoutSet, bp: Breakpoint) -> BTreeSet<String> {
        layout
            .get(bp)
            .unwrap()
            .iter()
            .map(|r| r.id.to_string())
            .collect()
    }

    #[test]
    fn empty_input_becomes_defaults_for_visible_modules() {
        let configs = only_visible(&[SIDEBAR, LIBRARY, PLAYLIST]);
        let layout = normalize(&LayoutSet::new(), &configs);

        for bp in Breakpoint::ALL {
            assert_eq!(
                ids_at(&layout, bp),
                [SIDEBAR, LIBRARY, PLAYLIST].iter().map(|s| s.to_string()).collect()
            );
        }
        assert_eq!(
            layout.rect(Breakpoint::Lg, &ModuleId::new(LIBRARY)),
            registry::default_rect(&ModuleId::new(LIBRARY), Breakpoint::Lg).as_ref()
        );
    }

    #[test]
    fn hide_then_show_restores_registry_default() {
        let configs = only_visible(&[SIDEBAR, LIBRARY, PLAYLIST]);
        let playlist = ModuleId::new(PLAYLIST);

        let mut edited = normalize(&LayoutSet::new(), &configs);
        let mut lg = edited.get(Breakpoint::Lg).unwrap().to_vec();
        for rect in &mut lg {
            if rect.id == playlist {
                rect.y = 30;
            }
        }
        edited.insert(Breakpoint::Lg, lg);

        let hidden_configs = set_visibility(&configs, &playlist, false);
        let hidden = normalize(&edited, &hidden_configs);
        assert_eq!(hidden.get(Breakpoint::Lg).unwrap().len(), 2);
        assert_eq!(
            ids_at(&hidden, Breakpoint::Lg),
            [SIDEBAR, LIBRARY].iter().map(|s| s.to_string()).collect()
        );

        let shown = normalize(&hidden, &configs);
        assert_eq!(shown.get(Breakpoint::Lg).unwrap().len(), 3);
        assert_eq!(
            shown.rect(Breakpoint::Lg, &playlist),
            registry::default_rect(&playlist, Breakpoint::Lg).as_ref()
        );
    }

    #[test]
    fn existing_geometry_passes_through() {
        let configs = only_visible(&[LIBRARY]);
        let mut input = LayoutSet::new();
        let odd = PlacementRect::new(LIBRARY, 11, 40, 9, 1);
        input.insert(Breakpoint::Md, vec![odd.clone()]);

        let layout = normalize(&input, &configs);
        assert_eq!(layout.get(Breakpoint::Md).unwrap(), &[odd][..]);
    }

    #[test]
    fn duplicates_and_unknown_ids_are_dropped() {
        let configs = only_visible(&[LIBRARY]);
        let mut input = LayoutSet::new();
        input.insert(
            Breakpoint::Lg,
            vec![
                PlacementRect::new(LIBRARY, 0, 0, 3, 3),
                PlacementRect::new("ghost", 3, 0, 3, 3),
                PlacementRect::new(LIBRARY, 6, 6, 3, 3),
            ],
        );

        let layout = normalize(&input, &configs);
        let lg = layout.get(Breakpoint::Lg).unwrap();
        assert_eq!(lg.len(), 1);
        assert_eq!((lg[0].x, lg[0].y), (0, 0));
    }

    #[test]
    fn every_breakpoint_is_emitted() {
        let layout = normalize(&LayoutSet::new(), &merge(None));
        assert_eq!(layout.iter().count(), Breakpoint::ALL.len());
    }

    #[test]
    fn nothing_visible_yields_empty_breakpoints() {
        let layout = normalize(&registry::default_layouts(), &only_visible(&[]));
        for (_, rects) in layout.iter() {
            assert!(rects.is_empty());
        }
    }
}
