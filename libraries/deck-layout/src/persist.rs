//! Persisted-state codec
//!
//! Turns the raw strings kept by a settings store into engine types. Decoding
//! never fails: unparseable records, wrong shapes and bad fields all read as
//! absent so the caller falls back to defaults.

use deck_core::{
    Breakpoint, LayoutSet, ManagerPosition, ModuleId, ModuleSizeConfig, ModuleStyleConfig,
    PlacementRect, SizeMap, StyleMap, TrackId,
};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::modules::{prune_sizes, prune_styles, PersistedModule};

/// Settings keys of every persisted record
pub mod keys {
    /// Serialized `LayoutSet`
    pub const LAYOUTS: &str = "dashboard.layouts";
    /// Serialized `ModuleConfig` list
    pub const MODULES: &str = "dashboard.modules";
    /// Serialized style override map
    pub const MODULE_STYLES: &str = "dashboard.module_styles";
    /// Serialized logical size override map
    pub const MODULE_SIZES: &str = "dashboard.module_sizes";
    /// Serialized `ManagerPosition`
    pub const MANAGER_POSITION: &str = "dashboard.manager_position";
    /// Favorite track ids
    pub const FAVORITES: &str = "library.favorites";
    /// Recently played track ids, newest first
    pub const RECENTS: &str = "library.recents";
}

/// Raw values of the layout records, as read from a store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredRecords {
    pub modules: Option<String>,
    pub layouts: Option<String>,
    pub styles: Option<String>,
    pub sizes: Option<String>,
}

fn parse(key: &str, raw: Option<&str>) -> Option<Value> {
    let raw = raw?;
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Discarding unparseable persisted value");
            None
        }
    }
}

fn as_u32(value: Option<&Value>) -> Option<u32> {
    value
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}

fn as_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

fn as_finite(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64).filter(|n| n.is_finite())
}

/// Decode persisted module configuration
///
/// `None` when the record is missing or is not a list. Entries without a
/// string id are skipped; fields of the wrong type read as absent.
pub fn decode_modules(raw: Option<&str>) -> Option<Vec<PersistedModule>> {
    let Some(Value::Array(items)) = parse(keys::MODULES, raw) else {
        if raw.is_some() {
            warn!(key = keys::MODULES, "Persisted module configuration is not a list");
        }
        return None;
    };

    Some(
        items
            .iter()
            .filter_map(|item| {
                Some(PersistedModule {
                    id: item.get("id")?.as_str()?.to_string(),
                    title: as_string(item.get("title")),
                    is_visible: item.get("isVisible").and_then(Value::as_bool),
                })
            })
            .collect(),
    )
}

fn decode_rect(item: &Value) -> Option<PlacementRect> {
    let id = item.get("id").or_else(|| item.get("i"))?.as_str()?;
    let w = as_u32(item.get("w")).filter(|w| *w > 0)?;
    let h = as_u32(item.get("h")).filter(|h| *h > 0)?;

    Some(PlacementRect {
        id: ModuleId::new(id),
        x: as_u32(item.get("x"))?,
        y: as_u32(item.get("y"))?,
        w,
        h,
        min_w: as_u32(item.get("minW")).filter(|m| *m > 0),
        min_h: as_u32(item.get("minH")).filter(|m| *m > 0),
    })
}

/// Decode a persisted layout set
///
/// Unknown breakpoint keys and non-list values are skipped, as are rects
/// with missing, negative or zero-sized geometry. Anything unreadable yields
/// an empty set, which normalizes to the registry defaults.
pub fn decode_layouts(raw: Option<&str>) -> LayoutSet {
    let Some(Value::Object(map)) = parse(keys::LAYOUTS, raw) else {
        if raw.is_some() {
            warn!(key = keys::LAYOUTS, "Persisted layouts are not an object, using defaults");
        }
        return LayoutSet::new();
    };

    map.iter()
        .filter_map(|(key, value)| {
            let bp = Breakpoint::from_str(key)?;
            let items = value.as_array()?;
            Some((bp, items.iter().filter_map(decode_rect).collect()))
        })
        .collect()
}

fn decode_style(value: &Value) -> ModuleStyleConfig {
    ModuleStyleConfig {
        background: as_string(value.get("background")),
        text_color: as_string(value.get("textColor")),
        border_radius: as_finite(value.get("borderRadius")).filter(|r| *r >= 0.0),
        opacity: as_finite(value.get("opacity")).map(|o| o.clamp(0.0, 1.0)),
        font_size: as_finite(value.get("fontSize")).filter(|s| *s >= 0.0),
        font_family: as_string(value.get("fontFamily")),
    }
}

/// Decode persisted style overrides, pruning empty and unknown entries
pub fn decode_styles(raw: Option<&str>) -> StyleMap {
    let Some(Value::Object(map)) = parse(keys::MODULE_STYLES, raw) else {
        return StyleMap::new();
    };

    prune_styles(
        map.iter()
            .map(|(id, value)| (ModuleId::new(id.as_str()), decode_style(value)))
            .collect(),
    )
}

/// Decode persisted size overrides, pruning empty and unknown entries
pub fn decode_sizes(raw: Option<&str>) -> SizeMap {
    let Some(Value::Object(map)) = parse(keys::MODULE_SIZES, raw) else {
        return SizeMap::new();
    };

    prune_sizes(
        map.iter()
            .map(|(id, value)| {
                let size = ModuleSizeConfig {
                    w: as_u32(value.get("w")),
                    h: as_u32(value.get("h")),
                };
                (ModuleId::new(id.as_str()), size)
            })
            .collect(),
    )
}

/// Decode the manager panel position, defaulting when unreadable
pub fn decode_manager_position(raw: Option<&str>) -> ManagerPosition {
    parse(keys::MANAGER_POSITION, raw)
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

/// Decode a list of track ids, skipping non-string entries
pub fn decode_track_ids(key: &str, raw: Option<&str>) -> Vec<TrackId> {
    match parse(key, raw) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(TrackId::new)
            .collect(),
        _ => Vec::new(),
    }
}

/// Serialize a record for storage
pub fn encode<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}
