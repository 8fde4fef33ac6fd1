//! Deck Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Deck Player.
//!
//! This crate provides the vocabulary shared by the layout engine, the
//! persistence gateway, the playback wrapper, and the desktop coordinator.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Breakpoint`, `PlacementRect`, `LayoutSet`, `ModuleConfig`, etc.
//! - **Collaborator Traits**: `AudioBackend`, `SettingsStore`
//! - **Error Handling**: Unified `DeckError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use deck_core::types::{Breakpoint, LayoutSet, ModuleId, PlacementRect};
//!
//! let mut layouts = LayoutSet::new();
//! layouts.insert(
//!     Breakpoint::Lg,
//!     vec![PlacementRect::new(ModuleId::new("library"), 2, 0, 7, 10)],
//! );
//!
//! assert_eq!(layouts.get(Breakpoint::Lg).map(<[_]>::len), Some(1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{DeckError, Result};
pub use traits::{AudioBackend, SettingsStore, EQ_BANDS};

pub use types::{
    // Grid
    Breakpoint, LayoutSet, PlacementRect,
    // Modules
    ModuleConfig, ModuleId, ModuleSizeConfig, ModuleStyleConfig, SizeDimension, SizeMap,
    StyleField, StyleMap,
    // Floating panel
    Extent, ManagerPosition,
    // Playback
    Track, TrackId,
};
