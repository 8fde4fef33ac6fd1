//! Deck Player - Playback
//!
//! Thin playback layer in front of an audio backend.
//!
//! This crate provides:
//! - Five-band equalizer model with clamped gains
//! - `Transport`: play/pause/stop/next/previous over a track list
//! - `HeadlessBackend`: an [`AudioBackend`](deck_core::AudioBackend) that
//!   keeps state without producing sound
//!
//! Decoding and device output live behind the backend trait; nothing in this
//! crate touches the layout engine.
//!
//! # Example
//!
//! ```rust
//! use deck_core::Track;
//! use deck_playback::{HeadlessBackend, Transport};
//!
//! let tracks = vec![
//!     Track::new("1", "Intro", "/music/intro.flac"),
//!     Track::new("2", "Outro", "/music/outro.flac"),
//! ];
//! let mut transport = Transport::with_tracks(HeadlessBackend::new(), tracks);
//!
//! transport.play().unwrap();
//! transport.previous().unwrap();
//! assert_eq!(transport.current_track().unwrap().title, "Outro");
//! ```

pub mod equalizer;
pub mod error;
pub mod headless;
pub mod transport;

pub use equalizer::{Equalizer, BAND_LABELS, MAX_GAIN_DB, MIN_GAIN_DB};
pub use error::{PlaybackError, Result};
pub use headless::HeadlessBackend;
pub use transport::Transport;
