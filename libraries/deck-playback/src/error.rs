//! Error types for playback

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No track is currently loaded
    #[error("No track loaded")]
    NoTrackLoaded,

    /// Track list is empty
    #[error("Track list is empty")]
    EmptyTrackList,

    /// Track id not present in the track list
    #[error("Track not found: {0}")]
    TrackNotFound(String),

    /// Equalizer band index out of range
    #[error("Equalizer band out of range: {0}")]
    BandOutOfRange(usize),

    /// Error reported by the audio backend
    #[error("Audio backend error: {0}")]
    Backend(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

impl From<deck_core::DeckError> for PlaybackError {
    fn from(err: deck_core::DeckError) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<PlaybackError> for deck_core::DeckError {
    fn from(err: PlaybackError) -> Self {
        deck_core::DeckError::audio(err.to_string())
    }
}
