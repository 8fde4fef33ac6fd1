//! Integration tests for the transport over the headless backend

use deck_core::{AudioBackend, Track, TrackId};
use deck_playback::{HeadlessBackend, PlaybackError, Transport};

fn track(id: &str, duration: f64) -> Track {
    let mut track = Track::new(id, format!("Track {id}"), format!("/music/{id}.flac"));
    track.duration = Some(duration);
    track
}

fn transport() -> Transport<HeadlessBackend> {
    Transport::with_tracks(
        HeadlessBackend::new(),
        vec![track("a", 120.0), track("b", 90.0), track("c", 60.0)],
    )
}

fn current_id(transport: &Transport<HeadlessBackend>) -> Option<&str> {
    transport.current_track().map(|t| t.id.as_str())
}

#[test]
fn test_play_starts_first_track() {
    let mut transport = transport();
    transport.play().unwrap();

    assert!(transport.is_playing());
    assert_eq!(current_id(&transport), Some("a"));
}

#[test]
fn test_play_on_empty_list_fails() {
    let mut transport = Transport::new(HeadlessBackend::new());
    assert!(matches!(transport.play(), Err(PlaybackError::EmptyTrackList)));
    assert!(matches!(transport.next(), Err(PlaybackError::EmptyTrackList)));
    assert!(matches!(transport.previous(), Err(PlaybackError::EmptyTrackList)));
}

#[test]
fn test_replaying_current_track_resumes() {
    let mut transport = transport();
    transport.play_track(&TrackId::new("b")).unwrap();
    transport.backend_mut().advance(42.0);
    transport.pause();

    transport.play_track(&TrackId::new("b")).unwrap();
    assert!(transport.is_playing());
    assert_eq!(transport.position(), 42.0);
}

#[test]
fn test_next_and_previous_wrap() {
    let mut transport = transport();

    transport.previous().unwrap();
    assert_eq!(current_id(&transport), Some("c"));

    transport.next().unwrap();
    assert_eq!(current_id(&transport), Some("a"));

    transport.next().unwrap();
    transport.next().unwrap();
    transport.next().unwrap();
    assert_eq!(current_id(&transport), Some("a"));
}

#[test]
fn test_toggle() {
    let mut transport = transport();
    transport.toggle().unwrap();
    assert!(transport.is_playing());
    transport.toggle().unwrap();
    assert!(!transport.is_playing());
    assert_eq!(current_id(&transport), Some("a"));
}

#[test]
fn test_removing_current_track_stops_playback() {
    let mut transport = transport();
    transport.play_track(&TrackId::new("b")).unwrap();

    let removed = transport.remove_track(&TrackId::new("b")).unwrap();
    assert_eq!(removed.id.as_str(), "b");
    assert!(!transport.is_playing());
    assert_eq!(transport.current_track(), None);
    assert_eq!(transport.tracks().len(), 2);
}

#[test]
fn test_removing_earlier_track_keeps_selection() {
    let mut transport = transport();
    transport.play_track(&TrackId::new("c")).unwrap();

    transport.remove_track(&TrackId::new("a")).unwrap();
    assert_eq!(current_id(&transport), Some("c"));
    assert!(transport.is_playing());
}

#[test]
fn test_remove_unknown_track() {
    let mut transport = transport();
    assert!(matches!(
        transport.remove_track(&TrackId::new("zzz")),
        Err(PlaybackError::TrackNotFound(_))
    ));
}

#[test]
fn test_set_tracks_keeps_current_when_present() {
    let mut transport = transport();
    transport.play_track(&TrackId::new("b")).unwrap();

    transport.set_tracks(vec![track("b", 90.0), track("d", 30.0)]);
    assert_eq!(current_id(&transport), Some("b"));
    assert!(transport.is_playing());

    transport.set_tracks(vec![track("d", 30.0)]);
    assert_eq!(transport.current_track(), None);
    assert!(!transport.is_playing());
}

#[test]
fn test_seek_requires_a_track() {
    let mut transport = transport();
    assert!(matches!(transport.seek(5.0), Err(PlaybackError::NoTrackLoaded)));

    transport.play().unwrap();
    transport.seek(60.0).unwrap();
    assert_eq!(transport.position(), 60.0);
    assert_eq!(transport.progress(), 0.5);
}

#[test]
fn test_equalizer_reaches_backend_sanitized() {
    let mut transport = transport();

    let applied = transport.set_equalizer([3.0, -20.0, f32::NAN, 0.5, 15.0]);
    assert_eq!(applied, [3.0, -12.0, 0.0, 0.5, 12.0]);
    assert_eq!(transport.backend().equalizer_values(), applied);

    assert_eq!(transport.set_band(1, 4.0).unwrap(), 4.0);
    assert_eq!(transport.backend().equalizer_values()[1], 4.0);
    assert!(transport.set_band(9, 1.0).is_err());
}

#[test]
fn test_backend_errors_are_wrapped() {
    let mut transport =
        Transport::with_tracks(HeadlessBackend::new(), vec![Track::new("x", "No file", "")]);
    assert!(matches!(transport.play(), Err(PlaybackError::Backend(_))));
    assert_eq!(transport.current_track(), None);
}
