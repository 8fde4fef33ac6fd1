//! Module configuration store
//!
//! Pure functions over the per-module visibility/title list and the sparse
//! style and size override maps. Every operation returns a new snapshot and
//! leaves its input untouched.

use std::collections::BTreeSet;

use deck_core::{
    ModuleConfig, ModuleId, ModuleSizeConfig, ModuleStyleConfig, SizeDimension, SizeMap,
    StyleField, StyleMap,
};
use tracing::debug;

use crate::registry;

/// One persisted module entry; fields that failed to parse are `None`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedModule {
    pub id: String,
    pub title: Option<String>,
    pub is_visible: Option<bool>,
}

/// Merge persisted configuration with the registry
///
/// Produces exactly one config per registered module, in registry order.
/// Persisted ids the registry no longer knows are dropped; missing fields
/// fall back to the registry title and to visible.
pub fn merge(persisted: Option<&[PersistedModule]>) -> Vec<ModuleConfig> {
    let persisted = persisted.unwrap_or_default();

    let dropped = persisted
        .iter()
        .filter(|entry| !registry::is_registered(&entry.id))
        .count();
    if dropped > 0 {
        debug!(dropped, "Ignoring persisted configs for unregistered modules");
    }

    registry::modules()
        .iter()
        .map(|def| {
            let saved = persisted.iter().find(|entry| entry.id == def.id);
            ModuleConfig {
                id: def.module_id(),
                title: saved
                    .and_then(|entry| entry.title.clone())
                    .unwrap_or_else(|| def.default_title.to_string()),
                is_visible: saved.and_then(|entry| entry.is_visible).unwrap_or(true),
            }
        })
        .collect()
}

/// Ids of every visible module
pub fn visible_ids(configs: &[ModuleConfig]) -> BTreeSet<ModuleId> {
    configs
        .iter()
        .filter(|config| config.is_visible)
        .map(|config| config.id.clone())
        .collect()
}

/// Show or hide one module
pub fn set_visibility(configs: &[ModuleConfig], id: &ModuleId, visible: bool) -> Vec<ModuleConfig> {
    configs
        .iter()
        .map(|config| {
            if &config.id == id {
                ModuleConfig {
                    is_visible: visible,
                    ..config.clone()
                }
            } else {
                config.clone()
            }
        })
        .collect()
}

/// Flip the visibility of one module
pub fn toggle_visibility(configs: &[ModuleConfig], id: &ModuleId) -> Vec<ModuleConfig> {
    let visible = configs
        .iter()
        .find(|config| &config.id == id)
        .map(|config| !config.is_visible);

    match visible {
        Some(visible) => set_visibility(configs, id, visible),
        None => configs.to_vec(),
    }
}

/// Change the header title of one module
///
/// A blank title restores the registry default.
pub fn rename(configs: &[ModuleConfig], id: &ModuleId, title: &str) -> Vec<ModuleConfig> {
    let title = title.trim();
    let title = if title.is_empty() {
        match registry::find(id.as_str()) {
            Some(def) => def.default_title.to_string(),
            None => return configs.to_vec(),
        }
    } else {
        title.to_string()
    };

    configs
        .iter()
        .map(|config| {
            if &config.id == id {
                ModuleConfig {
                    title: title.clone(),
                    ..config.clone()
                }
            } else {
                config.clone()
            }
        })
        .collect()
}

fn parse_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Apply one style-editor field to the override map
///
/// Blank or unparseable input clears the field. Opacity is clamped to
/// `[0, 1]`; negative radii and font sizes are cleared. A module left with
/// no overrides is removed from the map.
pub fn update_style(styles: &StyleMap, id: &ModuleId, field: StyleField, raw: &str) -> StyleMap {
    if !registry::is_registered(id.as_str()) {
        debug!(module = %id, "Ignoring style edit for unregistered module");
        return styles.clone();
    }

    let mut style = styles.get(id).cloned().unwrap_or_default();
    match field {
        StyleField::Background => style.background = parse_text(raw),
        StyleField::TextColor => style.text_color = parse_text(raw),
        StyleField::FontFamily => style.font_family = parse_text(raw),
        StyleField::Opacity => style.opacity = parse_number(raw).map(|v| v.clamp(0.0, 1.0)),
        StyleField::BorderRadius => style.border_radius = parse_number(raw).filter(|v| *v >= 0.0),
        StyleField::FontSize => style.font_size = parse_number(raw).filter(|v| *v >= 0.0),
    }

    let mut next = styles.clone();
    if style.is_empty() {
        next.remove(id);
    } else {
        next.insert(id.clone(), style);
    }
    next
}

/// Apply one size-editor field to the override map
///
/// Only values that round to a positive whole number are kept; anything
/// else clears the dimension. A module left with no overrides is removed.
pub fn update_size(sizes: &SizeMap, id: &ModuleId, dimension: SizeDimension, raw: &str) -> SizeMap {
    if !registry::is_registered(id.as_str()) {
        debug!(module = %id, "Ignoring size edit for unregistered module");
        return sizes.clone();
    }

    let value = parse_number(raw)
        .map(f64::round)
        .filter(|v| *v >= 1.0 && *v <= f64::from(u32::MAX))
        .map(|v| v as u32);

    let mut size = sizes.get(id).copied().unwrap_or_default();
    match dimension {
        SizeDimension::Width => size.w = value,
        SizeDimension::Height => size.h = value,
    }

    let mut next = sizes.clone();
    if size.is_empty() {
        next.remove(id);
    } else {
        next.insert(id.clone(), size);
    }
    next
}

/// Drop empty entries and entries for unregistered modules
pub fn prune_styles(styles: StyleMap) -> StyleMap {
    styles
        .into_iter()
        .filter(|(id, style)| !style.is_empty() && registry::is_registered(id.as_str()))
        .collect()
}

/// Drop empty entries and entries for unregistered modules
///
/// Zero dimensions are treated as absent.
pub fn prune_sizes(sizes: SizeMap) -> SizeMap {
    sizes
        .into_iter()
        .map(|(id, size)| {
            let size = ModuleSizeConfig {
                w: size.w.filter(|w| *w > 0),
                h: size.h.filter(|h| *h > 0),
            };
            (id, size)
        })
        .filter(|(id, size)| !size.is_empty() && registry::is_registered(id.as_str()))
        .collect()
}

/// Style for one module, or the empty default
pub fn style_for(styles: &StyleMap, id: &ModuleId) -> ModuleStyleConfig {
    styles.get(id).cloned().unwrap_or_default()
}
