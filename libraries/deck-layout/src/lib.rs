//! Deck Player - Layout Engine
//!
//! Computes, normalizes, resizes and deconflicts the responsive grid of
//! dashboard modules, and restores it from persisted state.
//!
//! This crate provides:
//! - Breakpoint/column model (`GridModel`)
//! - Compiled-in module registry with per-breakpoint default geometry
//! - Module configuration store (visibility, titles, style and size overrides)
//! - Layout normalizer, size-override resolver, collision resolver
//! - The full reconcile pipeline and the persisted-state codec
//!
//! # Architecture
//!
//! `deck-layout` is pure and synchronous:
//! - No dependency on storage (records come in as strings)
//! - No dependency on audio
//! - Never returns an error; invalid input always has a defined fallback
//!
//! # Example
//!
//! ```rust
//! use deck_core::{Breakpoint, LayoutSet, ModuleId, PlacementRect, SizeMap};
//! use deck_layout::{modules, reconcile, GridModel};
//!
//! let grid = GridModel::default();
//! let configs = modules::merge(None);
//!
//! // The host reports a drag that made two modules overlap
//! let mut proposed = LayoutSet::new();
//! proposed.insert(
//!     Breakpoint::Lg,
//!     vec![
//!         PlacementRect::new("sidebar", 0, 0, 6, 10),
//!         PlacementRect::new("library", 2, 0, 7, 10),
//!     ],
//! );
//!
//! let layout = reconcile(&proposed, &configs, &SizeMap::new(), &grid);
//! let library = layout.rect(Breakpoint::Lg, &ModuleId::new("library")).unwrap();
//! assert_eq!(library.y, 10);
//! ```

pub mod collision;
pub mod grid;
pub mod modules;
pub mod normalize;
pub mod persist;
pub mod pipeline;
pub mod registry;
pub mod sizing;

// Public exports
pub use collision::resolve_collisions;
pub use grid::GridModel;
pub use normalize::normalize;
pub use persist::StoredRecords;
pub use pipeline::{reconcile, restore, LayoutState};
pub use sizing::{apply_size_overrides, clamp_to_grid, derive_resized_configs, derive_size_configs};
