//! Audio backend that keeps state without producing sound

use deck_core::{AudioBackend, DeckError, Track, EQ_BANDS};
use tracing::trace;

use crate::equalizer::sanitize_gain;

/// Backend that tracks load/play/seek state only
///
/// Used by the command-line shell and in tests. Time only moves when
/// [`advance`](Self::advance) is called.
#[derive(Debug, Clone, Default)]
pub struct HeadlessBackend {
    loaded: Option<Track>,
    position: f64,
    playing: bool,
    gains: [f32; EQ_BANDS],
}

impl HeadlessBackend {
    /// Create an idle backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Track currently loaded, if any
    pub fn loaded(&self) -> Option<&Track> {
        self.loaded.as_ref()
    }

    /// Simulate `seconds` of playback
    ///
    /// Playback stops on its own once the end of a track with a known
    /// duration is reached.
    pub fn advance(&mut self, seconds: f64) {
        if !self.playing || !seconds.is_finite() || seconds <= 0.0 {
            return;
        }

        self.position += seconds;
        let duration = self.duration();
        if duration > 0.0 && self.position >= duration {
            self.position = duration;
            self.playing = false;
        }
    }
}

impl AudioBackend for HeadlessBackend {
    fn play(&mut self, track: &Track) -> deck_core::Result<()> {
        if track.path.as_os_str().is_empty() {
            return Err(DeckError::audio(format!("track {} has no file path", track.id)));
        }

        let same = self.loaded.as_ref().is_some_and(|t| t.id == track.id);
        if !same {
            self.loaded = Some(track.clone());
            self.position = 0.0;
        }
        self.playing = true;

        trace!(track = %track.id, resumed = same, "Headless play");
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn stop(&mut self) {
        self.playing = false;
        self.position = 0.0;
    }

    fn seek(&mut self, seconds: f64) {
        if self.loaded.is_none() || !seconds.is_finite() {
            return;
        }

        let duration = self.duration();
        self.position = if duration > 0.0 {
            seconds.clamp(0.0, duration)
        } else {
            seconds.max(0.0)
        };
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> f64 {
        self.loaded
            .as_ref()
            .and_then(|t| t.duration)
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or(0.0)
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn set_equalizer(&mut self, gains: [f32; EQ_BANDS]) {
        self.gains = gains.map(sanitize_gain);
    }

    fn equalizer_values(&self) -> [f32; EQ_BANDS] {
        self.gains
    }
}
