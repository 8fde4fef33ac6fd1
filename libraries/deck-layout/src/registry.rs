//! Module registry
//!
//! Compiled-in catalog of every placeable dashboard module together with its
//! default title and default geometry at each breakpoint. The registry is the
//! only source of module identity: anything not listed here is dropped when
//! persisted state is read back.

use deck_core::{Breakpoint, LayoutSet, ModuleConfig, ModuleId, PlacementRect};

pub const SIDEBAR: &str = "sidebar";
pub const LIBRARY: &str = "library";
pub const PLAYLIST: &str = "playlist";
pub const NOW_PLAYING: &str = "now-playing";
pub const EQUALIZER: &str = "equalizer";
pub const STATS: &str = "stats";
pub const FAVORITES: &str = "favorites";
pub const RECENT: &str = "recent";

/// Default cell geometry, including resize minimums
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub min_w: u32,
    pub min_h: u32,
}

const fn cell(x: u32, y: u32, w: u32, h: u32, min_w: u32, min_h: u32) -> DefaultRect {
    DefaultRect {
        x,
        y,
        w,
        h,
        min_w,
        min_h,
    }
}

/// A placeable module kind
#[derive(Debug)]
pub struct ModuleDefinition {
    pub id: &'static str,
    pub default_title: &'static str,
    /// Indexed by [`Breakpoint::index`]
    geometry: [DefaultRect; 5],
}

impl ModuleDefinition {
    /// Identifier as an owned [`ModuleId`]
    pub fn module_id(&self) -> ModuleId {
        ModuleId::new(self.id)
    }

    /// Raw default geometry at a breakpoint
    pub fn geometry(&self, breakpoint: Breakpoint) -> DefaultRect {
        self.geometry[breakpoint.index()]
    }

    /// Default placement at a breakpoint
    pub fn default_rect(&self, breakpoint: Breakpoint) -> PlacementRect {
        let g = self.geometry(breakpoint);
        PlacementRect::new(self.id, g.x, g.y, g.w, g.h).with_min(g.min_w, g.min_h)
    }

    /// Visible config with the default title
    pub fn default_config(&self) -> ModuleConfig {
        ModuleConfig::new(self.id, self.default_title)
    }
}

static REGISTRY: [ModuleDefinition; 8] = [
    ModuleDefinition {
        id: SIDEBAR,
        default_title: "Navigator",
        geometry: [
            cell(0, 0, 2, 10, 2, 4),
            cell(0, 0, 2, 10, 2, 4),
            cell(0, 0, 2, 10, 2, 4),
            cell(0, 0, 4, 4, 2, 3),
            cell(0, 0, 2, 4, 1, 3),
        ],
    },
    ModuleDefinition {
        id: LIBRARY,
        default_title: "Music Library",
        geometry: [
            cell(2, 0, 7, 10, 3, 4),
            cell(2, 0, 5, 10, 3, 4),
            cell(2, 0, 4, 10, 3, 4),
            cell(0, 4, 4, 10, 3, 4),
            cell(0, 4, 2, 10, 1, 4),
        ],
    },
    ModuleDefinition {
        id: PLAYLIST,
        default_title: "Current Playlist",
        geometry: [
            cell(9, 0, 3, 10, 2, 4),
            cell(7, 0, 3, 10, 2, 4),
            cell(0, 10, 6, 6, 2, 4),
            cell(0, 14, 4, 6, 2, 4),
            cell(0, 14, 2, 6, 1, 4),
        ],
    },
    ModuleDefinition {
        id: NOW_PLAYING,
        default_title: "Now Playing",
        geometry: [
            cell(0, 10, 4, 4, 2, 3),
            cell(0, 10, 4, 4, 2, 3),
            cell(0, 16, 3, 4, 2, 3),
            cell(0, 20, 4, 4, 2, 3),
            cell(0, 20, 2, 4, 1, 3),
        ],
    },
    ModuleDefinition {
        id: EQUALIZER,
        default_title: "Equalizer",
        geometry: [
            cell(4, 10, 4, 4, 3, 3),
            cell(4, 10, 3, 4, 3, 3),
            cell(3, 16, 3, 4, 3, 3),
            cell(0, 24, 4, 4, 3, 3),
            cell(0, 24, 2, 4, 1, 3),
        ],
    },
    ModuleDefinition {
        id: STATS,
        default_title: "Library Stats",
        geometry: [
            cell(8, 10, 4, 4, 2, 3),
            cell(7, 10, 3, 4, 2, 3),
            cell(0, 20, 6, 4, 2, 3),
            cell(0, 28, 4, 4, 2, 3),
            cell(0, 28, 2, 4, 1, 3),
        ],
    },
    ModuleDefinition {
        id: FAVORITES,
        default_title: "Favorites",
        geometry: [
            cell(0, 14, 6, 6, 2, 3),
            cell(0, 14, 5, 6, 2, 3),
            cell(0, 24, 3, 6, 2, 3),
            cell(0, 32, 4, 6, 2, 3),
            cell(0, 32, 2, 6, 1, 3),
        ],
    },
    ModuleDefinition {
        id: RECENT,
        default_title: "Recent Plays",
        geometry: [
            cell(6, 14, 6, 6, 2, 3),
            cell(5, 14, 5, 6, 2, 3),
            cell(3, 24, 3, 6, 2, 3),
            cell(0, 38, 4, 6, 2, 3),
            cell(0, 38, 2, 6, 1, 3),
        ],
    },
];

/// All registered modules, in registry order
pub fn modules() -> &'static [ModuleDefinition] {
    &REGISTRY
}

/// Look up a module by id
pub fn find(id: &str) -> Option<&'static ModuleDefinition> {
    REGISTRY.iter().find(|def| def.id == id)
}

/// Whether `id` names a registered module
pub fn is_registered(id: &str) -> bool {
    find(id).is_some()
}

/// Default placement of one module at a breakpoint
pub fn default_rect(id: &ModuleId, breakpoint: Breakpoint) -> Option<PlacementRect> {
    find(id.as_str()).map(|def| def.default_rect(breakpoint))
}

/// Default placements of every module at a breakpoint, in registry order
pub fn default_rects(breakpoint: Breakpoint) -> Vec<PlacementRect> {
    REGISTRY
        .iter()
        .map(|def| def.default_rect(breakpoint))
        .collect()
}

/// Default placements of every module at every breakpoint
pub fn default_layouts() -> LayoutSet {
    Breakpoint::ALL
        .into_iter()
        .map(|bp| (bp, default_rects(bp)))
        .collect()
}

/// One visible, default-titled config per module, in registry order
pub fn default_configs() -> Vec<ModuleConfig> {
    REGISTRY.iter().map(ModuleDefinition::default_config).collect()
}
