/// Per-module user configuration
use serde::{Deserialize, Serialize};

use super::ModuleId;

/// Visibility and display title of one module
///
/// After a merge there is exactly one entry per registered module; modules
/// are hidden, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleConfig {
    /// Module this entry configures
    pub id: ModuleId,
    /// Title shown in the module header
    pub title: String,
    /// Whether the module is placed on the grid
    pub is_visible: bool,
}

impl ModuleConfig {
    /// Create a visible module config
    pub fn new(id: impl Into<ModuleId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            is_visible: true,
        }
    }
}
