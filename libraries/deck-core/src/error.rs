/// Core error types for Deck Player
use thiserror::Error;

/// Result type alias using `DeckError`
pub type Result<T> = std::result::Result<T, DeckError>;

/// Core error type for Deck Player
#[derive(Error, Debug)]
pub enum DeckError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Audio playback errors
    #[error("Audio error: {0}")]
    Audio(String),

    /// Module id that is not part of the registry
    #[error("Unknown module: {0}")]
    UnknownModule(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl DeckError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an audio error
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    /// Create an unknown module error
    pub fn unknown_module(id: impl Into<String>) -> Self {
        Self::UnknownModule(id.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
