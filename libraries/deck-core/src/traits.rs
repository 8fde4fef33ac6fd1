/// Collaborator traits for Deck Player
use crate::error::Result;
use crate::types::Track;
use async_trait::async_trait;

/// Number of equalizer bands exposed by every audio backend
pub const EQ_BANDS: usize = 5;

/// Audio playback backend
///
/// The coordinator owns exactly one backend and drives it through this
/// interface. Decoding, device output and filter wiring stay behind it.
pub trait AudioBackend: Send {
    /// Start (or resume) playback of a track
    ///
    /// # Errors
    /// Returns an error if the track cannot be loaded
    fn play(&mut self, track: &Track) -> Result<()>;

    /// Pause playback, keeping the position
    fn pause(&mut self);

    /// Stop playback and rewind to the start
    fn stop(&mut self);

    /// Seek to a position in seconds
    fn seek(&mut self, seconds: f64);

    /// Current position in seconds (0 when nothing is loaded)
    fn position(&self) -> f64;

    /// Duration of the loaded track in seconds (0 when nothing is loaded)
    fn duration(&self) -> f64;

    /// Whether audio is currently playing
    fn is_playing(&self) -> bool;

    /// Apply per-band gains in dB
    fn set_equalizer(&mut self, gains: [f32; EQ_BANDS]);

    /// Current per-band gains in dB
    fn equalizer_values(&self) -> [f32; EQ_BANDS];
}

/// Durable key/value store for UI state
///
/// Values are opaque strings (JSON text by convention). Interpreting them,
/// including recovering from corrupt values, is the caller's job.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read the raw value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    async fn put(&self, key: &str, value: &str) -> Result<()>;
}
