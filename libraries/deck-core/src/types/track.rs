/// Track type as seen by the playback wrapper
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::TrackId;

/// A playable file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique identifier
    pub id: TrackId,
    /// Location on disk
    pub path: PathBuf,
    /// Display title
    pub title: String,
    /// Artist name, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Duration in seconds, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl Track {
    /// Create a track with only the required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: TrackId::new(id),
            path: path.into(),
            title: title.into(),
            artist: None,
            duration: None,
        }
    }
}
