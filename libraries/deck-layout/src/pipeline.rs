//! Layout pipeline
//!
//! Chains the engine stages in their fixed order:
//! normalize → size overrides → grid bounds → collisions.
//! Every user edit re-runs the chain from freshly edited state, and its
//! output is what gets persisted and handed to the grid surface.

use deck_core::{LayoutSet, ModuleConfig, SizeMap, StyleMap};
use tracing::debug;

use crate::collision::resolve_collisions;
use crate::grid::GridModel;
use crate::modules::merge;
use crate::normalize::normalize;
use crate::persist::{decode_layouts, decode_modules, decode_sizes, decode_styles, StoredRecords};
use crate::sizing::{apply_size_overrides, clamp_to_grid};

/// Everything the grid surface needs to render the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    pub configs: Vec<ModuleConfig>,
    pub layouts: LayoutSet,
    pub styles: StyleMap,
    pub sizes: SizeMap,
}

impl LayoutState {
    /// Default configuration with the reconciled default layout
    pub fn defaults(grid: &GridModel) -> Self {
        restore(&StoredRecords::default(), grid)
    }
}

/// Run the full pipeline over a proposed layout
///
/// The result has exactly one rect per visible module at every breakpoint,
/// no overlaps, and every rect within the grid and its minimums.
pub fn reconcile(
    layouts: &LayoutSet,
    configs: &[ModuleConfig],
    sizes: &SizeMap,
    grid: &GridModel,
) -> LayoutSet {
    let normalized = normalize(layouts, configs);
    let sized = apply_size_overrides(&normalized, sizes, grid);
    let bounded = clamp_to_grid(&sized, grid);
    let resolved = resolve_collisions(&bounded);

    debug!(
        breakpoints = resolved.iter().count(),
        size_overrides = sizes.len(),
        "Reconciled layout"
    );
    resolved
}

/// Rebuild dashboard state from persisted records
///
/// Merges configs first, then reconciles the stored layout against them.
/// Missing or corrupt records fall back to defaults individually.
pub fn restore(records: &StoredRecords, grid: &GridModel) -> LayoutState {
    let persisted = decode_modules(records.modules.as_deref());
    let configs = merge(persisted.as_deref());
    let styles = decode_styles(records.styles.as_deref());
    let sizes = decode_sizes(records.sizes.as_deref());
    let stored = decode_layouts(records.layouts.as_deref());

    let layouts = reconcile(&stored, &configs, &sizes, grid);

    LayoutState {
        configs,
        layouts,
        styles,
        sizes,
    }
}
