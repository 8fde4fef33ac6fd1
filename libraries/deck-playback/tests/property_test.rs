//! Property-based tests for the equalizer and transport

use deck_core::{Track, EQ_BANDS};
use deck_playback::{Equalizer, HeadlessBackend, Transport, MAX_GAIN_DB, MIN_GAIN_DB};
use proptest::prelude::*;

fn any_gain() -> impl Strategy<Value = f32> {
    prop_oneof![
        -100.0f32..100.0,
        Just(f32::NAN),
        Just(f32::INFINITY),
        Just(f32::NEG_INFINITY),
    ]
}

proptest! {
    /// Property: every band lands in range whatever the input
    #[test]
    fn gains_always_in_range(gains in prop::array::uniform5(any_gain())) {
        let eq = Equalizer::from_gains(gains);
        for gain in eq.gains() {
            prop_assert!(gain.is_finite());
            prop_assert!((MIN_GAIN_DB..=MAX_GAIN_DB).contains(&gain));
        }
    }

    /// Property: in-range gains are applied unchanged
    #[test]
    fn in_range_gains_are_kept(gains in prop::array::uniform5(MIN_GAIN_DB..=MAX_GAIN_DB)) {
        prop_assert_eq!(Equalizer::from_gains(gains).gains(), gains);
    }

    /// Property: n calls to next() from the start land on index n mod len
    #[test]
    fn next_wraps_modulo_length(len in 1usize..8, steps in 1usize..30) {
        let tracks: Vec<Track> = (0..len)
            .map(|i| Track::new(i.to_string(), format!("T{i}"), format!("/m/{i}.mp3")))
            .collect();
        let mut transport = Transport::with_tracks(HeadlessBackend::new(), tracks);

        for _ in 0..steps {
            transport.next().unwrap();
        }

        let expected = (steps - 1) % len;
        prop_assert_eq!(transport.current_track().unwrap().id.as_str(), expected.to_string());
    }
}

#[test]
fn band_count_matches_labels() {
    assert_eq!(deck_playback::BAND_LABELS.len(), EQ_BANDS);
}
