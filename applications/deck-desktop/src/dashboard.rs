//! Dashboard coordinator
//!
//! Owns every piece of dashboard state and is the only writer of it. The
//! grid surface reports proposed changes here; each operation re-runs the
//! layout pipeline from the edited state, persists what changed and hands
//! back a valid snapshot.

use deck_core::{
    Breakpoint, DeckError, Extent, LayoutSet, ManagerPosition, ModuleConfig, ModuleId,
    ModuleStyleConfig, PlacementRect, Result, SettingsStore, SizeDimension, SizeMap, StyleField,
    StyleMap, TrackId,
};
use deck_layout::persist::{self, keys};
use deck_layout::sizing::derive_resized_configs;
use deck_layout::{modules, reconcile, registry, restore, GridModel, LayoutState, StoredRecords};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Most recently played tracks kept in the recents list
pub const RECENTS_LIMIT: usize = 20;

/// Size of the floating module-manager panel
pub const MANAGER_PANEL: Extent = Extent {
    width: 320,
    height: 400,
};

/// Counts shown by the library stats module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStats {
    pub track_count: usize,
    pub playlist_count: usize,
    pub favorite_count: usize,
    pub recent_count: usize,
}

/// What the grid surface renders at the active breakpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub breakpoint: Breakpoint,
    pub columns: u32,
    pub modules: Vec<ModuleConfig>,
    pub layout: Vec<PlacementRect>,
    pub styles: StyleMap,
    pub sizes: SizeMap,
    pub manager_position: ManagerPosition,
    pub editing: bool,
}

/// Top-level owner of the dashboard state
pub struct Dashboard<S: SettingsStore> {
    store: S,
    grid: GridModel,
    state: LayoutState,
    active: Breakpoint,
    editing: bool,
    manager_position: ManagerPosition,
    favorites: Vec<TrackId>,
    recents: Vec<TrackId>,
}

async fn read<S: SettingsStore>(store: &S, key: &str) -> Option<String> {
    match store.get(key).await {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "Failed to read setting, using defaults");
            None
        }
    }
}

impl<S: SettingsStore> Dashboard<S> {
    /// Restore the dashboard from `store`
    ///
    /// Never fails: unreadable or corrupt records fall back to defaults one
    /// by one.
    pub async fn load(store: S, grid: GridModel) -> Self {
        let records = StoredRecords {
            modules: read(&store, keys::MODULES).await,
            layouts: read(&store, keys::LAYOUTS).await,
            styles: read(&store, keys::MODULE_STYLES).await,
            sizes: read(&store, keys::MODULE_SIZES).await,
        };
        let state = restore(&records, &grid);

        let manager_position =
            persist::decode_manager_position(read(&store, keys::MANAGER_POSITION).await.as_deref());
        let favorites =
            persist::decode_track_ids(keys::FAVORITES, read(&store, keys::FAVORITES).await.as_deref());
        let mut recents =
            persist::decode_track_ids(keys::RECENTS, read(&store, keys::RECENTS).await.as_deref());
        recents.truncate(RECENTS_LIMIT);

        info!(
            visible = modules::visible_ids(&state.configs).len(),
            styled = state.styles.len(),
            sized = state.sizes.len(),
            "Dashboard loaded"
        );

        Self {
            store,
            grid,
            state,
            active: Breakpoint::REFERENCE,
            editing: false,
            manager_position,
            favorites,
            recents,
        }
    }

    // ===== Accessors =====

    /// The backing settings store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Breakpoint/column model in use
    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    /// Module configs in registry order
    pub fn configs(&self) -> &[ModuleConfig] {
        &self.state.configs
    }

    /// Reconciled layouts for every breakpoint
    pub fn layouts(&self) -> &LayoutSet {
        &self.state.layouts
    }

    /// Style overrides
    pub fn styles(&self) -> &StyleMap {
        &self.state.styles
    }

    /// Logical size overrides
    pub fn sizes(&self) -> &SizeMap {
        &self.state.sizes
    }

    /// Style of one module, empty when not overridden
    pub fn style_for(&self, id: &ModuleId) -> ModuleStyleConfig {
        modules::style_for(&self.state.styles, id)
    }

    /// Breakpoint the surface is currently rendering
    pub fn active_breakpoint(&self) -> Breakpoint {
        self.active
    }

    /// Whether drag and resize from the surface are accepted
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Position of the module-manager panel
    pub fn manager_position(&self) -> ManagerPosition {
        self.manager_position
    }

    /// Favorite tracks in the order they were added
    pub fn favorites(&self) -> &[TrackId] {
        &self.favorites
    }

    /// Recently played tracks, newest first
    pub fn recents(&self) -> &[TrackId] {
        &self.recents
    }

    /// Rects at the active breakpoint
    pub fn active_layout(&self) -> &[PlacementRect] {
        self.state.layouts.get(self.active).unwrap_or_default()
    }

    /// Everything the surface needs for one render
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            breakpoint: self.active,
            columns: self.grid.columns(self.active),
            modules: self.state.configs.clone(),
            layout: self.active_layout().to_vec(),
            styles: self.state.styles.clone(),
            sizes: self.state.sizes.clone(),
            manager_position: self.manager_position,
            editing: self.editing,
        }
    }

    // ===== Persistence =====

    async fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = persist::encode(value)?;
        self.store.put(key, &raw).await.map_err(|e| {
            warn!(key, error = %e, "Failed to persist setting");
            e
        })
    }

    async fn save_layouts(&self) -> Result<()> {
        self.save(keys::LAYOUTS, &self.state.layouts).await
    }

    async fn save_modules(&self) -> Result<()> {
        self.save(keys::MODULES, &self.state.configs).await
    }

    async fn save_styles(&self) -> Result<()> {
        self.save(keys::MODULE_STYLES, &self.state.styles).await
    }

    async fn save_sizes(&self) -> Result<()> {
        self.save(keys::MODULE_SIZES, &self.state.sizes).await
    }

    fn require_module(id: &ModuleId) -> Result<()> {
        if registry::is_registered(id.as_str()) {
            Ok(())
        } else {
            Err(DeckError::unknown_module(id.as_str()))
        }
    }

    fn relayout(&mut self, proposed: &LayoutSet) {
        self.state.layouts = reconcile(
            proposed,
            &self.state.configs,
            &self.state.sizes,
            &self.grid,
        );
    }

    // ===== Grid surface callbacks =====

    /// Unlock or lock the grid for drag and resize
    ///
    /// The flag lives for the session only and starts locked.
    pub fn set_editing(&mut self, editing: bool) {
        if editing != self.editing {
            debug!(editing, "Layout edit mode changed");
            self.editing = editing;
        }
    }

    /// Accept a geometry change reported by the grid surface
    ///
    /// Ignored while the layout is locked: the current layouts come back
    /// unchanged and nothing is persisted.
    /// Breakpoints missing from `proposed` keep their current layout.
    /// Modules whose size changed at `active` get a new logical size so the
    /// resize carries over to every other breakpoint.
    pub async fn on_layout_change(
        &mut self,
        proposed: LayoutSet,
        active: Breakpoint,
    ) -> Result<&LayoutSet> {
        if !self.editing {
            debug!(breakpoint = %active, "Layout is locked, ignoring proposed geometry");
            return Ok(&self.state.layouts);
        }
        self.active = active;

        let resized = derive_resized_configs(&self.state.layouts, &proposed, active, &self.grid);
        let sizes_changed = !resized.is_empty();
        if sizes_changed {
            debug!(breakpoint = %active, modules = resized.len(), "Derived size overrides from resize");
            self.state.sizes.extend(resized);
        }

        let mut merged = self.state.layouts.clone();
        for (bp, rects) in proposed {
            merged.insert(bp, rects);
        }
        self.relayout(&merged);

        if sizes_changed {
            self.save_sizes().await?;
        }
        self.save_layouts().await?;
        Ok(&self.state.layouts)
    }

    /// Switch the breakpoint the surface renders
    pub async fn on_breakpoint_change(&mut self, breakpoint: Breakpoint) -> Result<&[PlacementRect]> {
        if breakpoint != self.active {
            debug!(from = %self.active, to = %breakpoint, "Breakpoint changed");
            self.active = breakpoint;
        }

        let current = self.state.layouts.clone();
        self.relayout(&current);
        self.save_layouts().await?;
        Ok(self.active_layout())
    }

    /// Track a viewport resize, switching breakpoint when needed
    pub async fn on_width_change(&mut self, width: u32) -> Result<Breakpoint> {
        let breakpoint = self.grid.breakpoint_for_width(width);
        if breakpoint != self.active {
            self.on_breakpoint_change(breakpoint).await?;
        }
        Ok(breakpoint)
    }

    // ===== Module manager =====

    /// Flip one module's visibility, returning the new state
    pub async fn toggle_visibility(&mut self, id: &ModuleId) -> Result<bool> {
        Self::require_module(id)?;
        self.state.configs = modules::toggle_visibility(&self.state.configs, id);
        let visible = modules::visible_ids(&self.state.configs).contains(id);
        self.apply_visibility(id, visible).await?;
        Ok(visible)
    }

    /// Show or hide one module
    pub async fn set_visibility(&mut self, id: &ModuleId, visible: bool) -> Result<()> {
        Self::require_module(id)?;
        self.state.configs = modules::set_visibility(&self.state.configs, id, visible);
        self.apply_visibility(id, visible).await
    }

    async fn apply_visibility(&mut self, id: &ModuleId, visible: bool) -> Result<()> {
        let current = self.state.layouts.clone();
        self.relayout(&current);
        info!(module = %id, visible, "Module visibility changed");

        self.save_modules().await?;
        self.save_layouts().await
    }

    /// Rename a module; a blank title restores the default
    pub async fn rename_module(&mut self, id: &ModuleId, title: &str) -> Result<String> {
        Self::require_module(id)?;
        self.state.configs = modules::rename(&self.state.configs, id, title);
        self.save_modules().await?;

        Ok(self
            .state
            .configs
            .iter()
            .find(|config| &config.id == id)
            .map(|config| config.title.clone())
            .unwrap_or_default())
    }

    /// Apply one style-editor field
    pub async fn set_style_field(
        &mut self,
        id: &ModuleId,
        field: StyleField,
        raw: &str,
    ) -> Result<ModuleStyleConfig> {
        Self::require_module(id)?;
        self.state.styles = modules::update_style(&self.state.styles, id, field, raw);
        self.save_styles().await?;
        Ok(self.style_for(id))
    }

    /// Apply one size-editor field and re-run the layout
    pub async fn set_size_field(
        &mut self,
        id: &ModuleId,
        dimension: SizeDimension,
        raw: &str,
    ) -> Result<&LayoutSet> {
        Self::require_module(id)?;
        self.state.sizes = modules::update_size(&self.state.sizes, id, dimension, raw);

        let current = self.state.layouts.clone();
        self.relayout(&current);

        self.save_sizes().await?;
        self.save_layouts().await?;
        Ok(&self.state.layouts)
    }

    /// Restore default geometry and drop every size override
    pub async fn reset_layout(&mut self) -> Result<&LayoutSet> {
        self.state.sizes.clear();
        self.relayout(&registry::default_layouts());
        info!("Layout reset to defaults");

        self.save_sizes().await?;
        self.save_layouts().await?;
        Ok(&self.state.layouts)
    }

    /// Restore default titles and visibility and drop all overrides
    ///
    /// User geometry of modules that stay visible is kept.
    pub async fn reset_modules(&mut self) -> Result<()> {
        self.state.configs = registry::default_configs();
        self.state.styles.clear();
        self.state.sizes.clear();

        let current = self.state.layouts.clone();
        self.relayout(&current);
        info!("Module configuration reset to defaults");

        self.save_modules().await?;
        self.save_styles().await?;
        self.save_sizes().await?;
        self.save_layouts().await
    }

    /// Move the module-manager panel, keeping it inside the viewport
    pub async fn move_manager(
        &mut self,
        position: ManagerPosition,
        viewport: Extent,
    ) -> Result<ManagerPosition> {
        self.manager_position = position.clamp_to(viewport, MANAGER_PANEL);
        self.save(keys::MANAGER_POSITION, &self.manager_position)
            .await?;
        Ok(self.manager_position)
    }

    // ===== Library bookkeeping =====

    /// Add or remove a favorite, returning whether it is now a favorite
    pub async fn toggle_favorite(&mut self, track: &TrackId) -> Result<bool> {
        let favorite = if let Some(index) = self.favorites.iter().position(|t| t == track) {
            self.favorites.remove(index);
            false
        } else {
            self.favorites.push(track.clone());
            true
        };

        self.save(keys::FAVORITES, &self.favorites).await?;
        Ok(favorite)
    }

    /// Move a track to the front of the recents list
    pub async fn record_recent(&mut self, track: &TrackId) -> Result<()> {
        self.recents.retain(|t| t != track);
        self.recents.insert(0, track.clone());
        self.recents.truncate(RECENTS_LIMIT);

        self.save(keys::RECENTS, &self.recents).await
    }

    /// Counts for the stats module
    ///
    /// Track and playlist totals come from the catalog, which the dashboard
    /// does not own.
    pub fn library_stats(&self, track_count: usize, playlist_count: usize) -> LibraryStats {
        LibraryStats {
            track_count,
            playlist_count,
            favorite_count: self.favorites.len(),
            recent_count: self.recents.len(),
        }
    }
}
