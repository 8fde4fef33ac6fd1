//! Playback transport over an injected backend
//!
//! The transport owns the track list and the current index; everything
//! audible is delegated to the [`AudioBackend`].

use deck_core::{AudioBackend, Track, TrackId, EQ_BANDS};
use tracing::{debug, info};

use crate::equalizer::Equalizer;
use crate::error::{PlaybackError, Result};

/// Play/pause/stop/next/previous over a list of tracks
pub struct Transport<B: AudioBackend> {
    backend: B,
    tracks: Vec<Track>,
    current: Option<usize>,
    equalizer: Equalizer,
}

impl<B: AudioBackend> Transport<B> {
    /// Create a transport with an empty track list
    pub fn new(backend: B) -> Self {
        let equalizer = Equalizer::from_gains(backend.equalizer_values());
        Self {
            backend,
            tracks: Vec::new(),
            current: None,
            equalizer,
        }
    }

    /// Create a transport over `tracks`
    pub fn with_tracks(backend: B, tracks: Vec<Track>) -> Self {
        let mut transport = Self::new(backend);
        transport.tracks = tracks;
        transport
    }

    /// The injected backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the injected backend
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Track list in play order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Track selected for playback
    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|i| self.tracks.get(i))
    }

    /// Append a track to the list
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Replace the track list
    ///
    /// The current track stays selected when it is still in the new list;
    /// otherwise playback stops.
    pub fn set_tracks(&mut self, tracks: Vec<Track>) {
        let current_id = self.current_track().map(|t| t.id.clone());
        self.tracks = tracks;
        self.current = current_id.and_then(|id| self.index_of(&id));

        if self.current.is_none() {
            self.backend.stop();
        }
    }

    /// Remove a track from the list
    ///
    /// Removing the current track stops playback.
    pub fn remove_track(&mut self, id: &TrackId) -> Result<Track> {
        let index = self
            .index_of(id)
            .ok_or_else(|| PlaybackError::TrackNotFound(id.to_string()))?;
        let removed = self.tracks.remove(index);

        match self.current {
            Some(current) if current == index => {
                self.backend.stop();
                self.current = None;
                info!(track = %id, "Removed the playing track, playback stopped");
            }
            Some(current) if current > index => self.current = Some(current - 1),
            _ => {}
        }

        Ok(removed)
    }

    fn index_of(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| &t.id == id)
    }

    fn play_index(&mut self, index: usize) -> Result<()> {
        let track = self.tracks.get(index).ok_or(PlaybackError::EmptyTrackList)?;
        self.backend.play(track)?;
        self.current = Some(index);
        debug!(track = %track.id, index, "Playing");
        Ok(())
    }

    /// Play a track from the list
    ///
    /// Playing the current track again resumes it instead of restarting.
    pub fn play_track(&mut self, id: &TrackId) -> Result<()> {
        let index = self
            .index_of(id)
            .ok_or_else(|| PlaybackError::TrackNotFound(id.to_string()))?;
        self.play_index(index)
    }

    /// Resume the current track, or start the first one
    pub fn play(&mut self) -> Result<()> {
        match self.current {
            Some(index) => self.play_index(index),
            None if self.tracks.is_empty() => Err(PlaybackError::EmptyTrackList),
            None => self.play_index(0),
        }
    }

    /// Pause, keeping the position
    pub fn pause(&mut self) {
        self.backend.pause();
    }

    /// Toggle between playing and paused
    pub fn toggle(&mut self) -> Result<()> {
        if self.backend.is_playing() {
            self.pause();
            Ok(())
        } else {
            self.play()
        }
    }

    /// Stop and rewind the current track
    pub fn stop(&mut self) {
        self.backend.stop();
    }

    /// Skip to the next track, wrapping to the first
    pub fn next(&mut self) -> Result<()> {
        let len = self.tracks.len();
        if len == 0 {
            return Err(PlaybackError::EmptyTrackList);
        }
        let index = self.current.map_or(0, |i| (i + 1) % len);
        self.play_index(index)
    }

    /// Skip to the previous track, wrapping to the last
    pub fn previous(&mut self) -> Result<()> {
        let len = self.tracks.len();
        if len == 0 {
            return Err(PlaybackError::EmptyTrackList);
        }
        let index = self.current.map_or(len - 1, |i| (i + len - 1) % len);
        self.play_index(index)
    }

    /// Seek within the current track
    pub fn seek(&mut self, seconds: f64) -> Result<()> {
        if self.current.is_none() {
            return Err(PlaybackError::NoTrackLoaded);
        }
        self.backend.seek(seconds);
        Ok(())
    }

    /// Current position in seconds
    pub fn position(&self) -> f64 {
        self.backend.position()
    }

    /// Duration of the current track in seconds
    pub fn duration(&self) -> f64 {
        self.backend.duration()
    }

    /// Whether audio is playing
    pub fn is_playing(&self) -> bool {
        self.backend.is_playing()
    }

    /// Position as a fraction of the duration (0 when unknown)
    pub fn progress(&self) -> f64 {
        let duration = self.duration();
        if duration > 0.0 {
            (self.position() / duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Current equalizer state
    pub fn equalizer(&self) -> Equalizer {
        self.equalizer
    }

    /// Replace every band, returning the gains actually applied
    pub fn set_equalizer(&mut self, gains: [f32; EQ_BANDS]) -> [f32; EQ_BANDS] {
        self.equalizer = Equalizer::from_gains(gains);
        self.backend.set_equalizer(self.equalizer.gains());
        self.equalizer.gains()
    }

    /// Change one band, returning the gain actually applied
    pub fn set_band(&mut self, index: usize, gain: f32) -> Result<f32> {
        let applied = self.equalizer.set_band(index, gain)?;
        self.backend.set_equalizer(self.equalizer.gains());
        Ok(applied)
    }
}
