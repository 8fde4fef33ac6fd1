//! Player session
//!
//! Pairs the dashboard with a playback transport. The audio backend is
//! injected here; the layout engine never sees it.

use deck_core::{AudioBackend, Result, SettingsStore, TrackId, EQ_BANDS};
use deck_playback::Transport;
use tracing::debug;

use crate::dashboard::{Dashboard, LibraryStats};

/// Dashboard plus transport, wired so playback feeds the recents list
pub struct Session<S: SettingsStore, B: AudioBackend> {
    dashboard: Dashboard<S>,
    transport: Transport<B>,
    playlist_count: usize,
}

impl<S: SettingsStore, B: AudioBackend> Session<S, B> {
    /// Combine a loaded dashboard with a transport
    pub fn new(dashboard: Dashboard<S>, transport: Transport<B>) -> Self {
        Self {
            dashboard,
            transport,
            playlist_count: 0,
        }
    }

    /// The dashboard coordinator
    pub fn dashboard(&self) -> &Dashboard<S> {
        &self.dashboard
    }

    /// Mutable access to the dashboard coordinator
    pub fn dashboard_mut(&mut self) -> &mut Dashboard<S> {
        &mut self.dashboard
    }

    /// The playback transport
    pub fn transport(&self) -> &Transport<B> {
        &self.transport
    }

    /// Mutable access to the playback transport
    pub fn transport_mut(&mut self) -> &mut Transport<B> {
        &mut self.transport
    }

    /// Number of playlists reported by the catalog
    pub fn set_playlist_count(&mut self, count: usize) {
        self.playlist_count = count;
    }

    async fn note_current(&mut self) -> Result<()> {
        if let Some(track) = self.transport.current_track() {
            let id = track.id.clone();
            debug!(track = %id, "Recording recent play");
            self.dashboard.record_recent(&id).await?;
        }
        Ok(())
    }

    /// Play a track and record it as recently played
    pub async fn play_track(&mut self, id: &TrackId) -> Result<()> {
        self.transport.play_track(id)?;
        self.note_current().await
    }

    /// Skip forward and record the new track
    pub async fn next(&mut self) -> Result<()> {
        self.transport.next()?;
        self.note_current().await
    }

    /// Skip back and record the new track
    pub async fn previous(&mut self) -> Result<()> {
        self.transport.previous()?;
        self.note_current().await
    }

    /// Toggle the current track's favorite flag
    ///
    /// Returns `None` when nothing is selected.
    pub async fn toggle_current_favorite(&mut self) -> Result<Option<bool>> {
        let Some(id) = self.transport.current_track().map(|t| t.id.clone()) else {
            return Ok(None);
        };
        self.dashboard.toggle_favorite(&id).await.map(Some)
    }

    /// Apply equalizer gains from the equalizer module
    pub fn set_equalizer(&mut self, gains: [f32; EQ_BANDS]) -> [f32; EQ_BANDS] {
        self.transport.set_equalizer(gains)
    }

    /// Counts for the stats module
    pub fn library_stats(&self) -> LibraryStats {
        self.dashboard
            .library_stats(self.transport.tracks().len(), self.playlist_count)
    }
}
