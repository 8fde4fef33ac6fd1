//! Five-band equalizer model
//!
//! Gains are in dB and always kept inside `[MIN_GAIN_DB, MAX_GAIN_DB]`.
//! Backends receive the sanitized values only.

use deck_core::EQ_BANDS;

use crate::error::{PlaybackError, Result};

/// Lowest accepted band gain in dB
pub const MIN_GAIN_DB: f32 = -12.0;

/// Highest accepted band gain in dB
pub const MAX_GAIN_DB: f32 = 12.0;

/// Display labels of the bands, low to high
pub const BAND_LABELS: [&str; EQ_BANDS] = ["60Hz", "230Hz", "910Hz", "3.6kHz", "14kHz"];

/// Clamp a gain into range; NaN and infinities become flat (0 dB)
pub fn sanitize_gain(gain: f32) -> f32 {
    if gain.is_finite() {
        gain.clamp(MIN_GAIN_DB, MAX_GAIN_DB)
    } else {
        0.0
    }
}

/// Per-band gains
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Equalizer {
    gains: [f32; EQ_BANDS],
}

impl Equalizer {
    /// Flat equalizer (all bands 0 dB)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw gains, sanitizing each band
    pub fn from_gains(gains: [f32; EQ_BANDS]) -> Self {
        Self {
            gains: gains.map(sanitize_gain),
        }
    }

    /// Current gains
    pub fn gains(&self) -> [f32; EQ_BANDS] {
        self.gains
    }

    /// Gain of one band
    pub fn band(&self, index: usize) -> Option<f32> {
        self.gains.get(index).copied()
    }

    /// Set one band, returning the value actually applied
    pub fn set_band(&mut self, index: usize, gain: f32) -> Result<f32> {
        let slot = self
            .gains
            .get_mut(index)
            .ok_or(PlaybackError::BandOutOfRange(index))?;
        *slot = sanitize_gain(gain);
        Ok(*slot)
    }

    /// Flatten every band
    pub fn reset(&mut self) {
        self.gains = [0.0; EQ_BANDS];
    }

    /// Whether every band is at 0 dB
    pub fn is_flat(&self) -> bool {
        self.gains.iter().all(|g| *g == 0.0)
    }

    /// `(label, gain)` pairs, low band first
    pub fn bands(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        BAND_LABELS.iter().copied().zip(self.gains.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_flat() {
        let eq = Equalizer::new();
        assert!(eq.is_flat());
        assert_eq!(eq.gains(), [0.0; EQ_BANDS]);
    }

    #[test]
    fn test_gains_are_clamped() {
        let eq = Equalizer::from_gains([-40.0, -12.0, 3.5, 12.0, 99.0]);
        assert_eq!(eq.gains(), [-12.0, -12.0, 3.5, 12.0, 12.0]);
    }

    #[test]
    fn test_non_finite_gains_are_flattened() {
        let eq = Equalizer::from_gains([f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 1.0, 0.0]);
        assert_eq!(eq.gains(), [0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_set_band() {
        let mut eq = Equalizer::new();
        assert_eq!(eq.set_band(2, 20.0).unwrap(), 12.0);
        assert_eq!(eq.band(2), Some(12.0));
        assert!(!eq.is_flat());

        assert!(matches!(
            eq.set_band(EQ_BANDS, 1.0),
            Err(PlaybackError::BandOutOfRange(5))
        ));

        eq.reset();
        assert!(eq.is_flat());
    }

    #[test]
    fn test_band_labels() {
        let eq = Equalizer::from_gains([1.0, 2.0, 3.0, 4.0, 5.0]);
        let bands: Vec<_> = eq.bands().collect();
        assert_eq!(bands[0], ("60Hz", 1.0));
        assert_eq!(bands[4], ("14kHz", 5.0));
    }
}
