//! Chromatic index and frequency conversion utilities.

use super::constants::{C0_FREQ_HZ, MIDI_IDX_C0, ONE_OVER_LN_2};

/// Convert a chromatic index to frequency in Hz (12-TET, A4 = 440 Hz).
///
/// Uses `f = C0 * 2^((idx - 12) / 12)`, anchoring at C0 rather than A4.
///
/// # Examples
/// ```
/// use notecodec_pitch::index_to_freq;
///
/// assert!((index_to_freq(69) - 440.0).abs() < 1e-9);
/// assert!((index_to_freq(60) - 261.626).abs() < 0.001);
/// ```
pub fn index_to_freq(idx: i32) -> f64 {
    C0_FREQ_HZ * 2.0_f64.powf((f64::from(idx) - f64::from(MIDI_IDX_C0)) / 12.0)
}

/// Convert a frequency in Hz to the nearest chromatic index.
///
/// Returns `None` for zero, negative, NaN or infinite frequencies.
///
/// # Examples
/// ```
/// use notecodec_pitch::freq_to_index;
///
/// assert_eq!(freq_to_index(440.0), Some(69));
/// assert_eq!(freq_to_index(16.3516), Some(12));
/// assert_eq!(freq_to_index(0.0), None);
/// ```
pub fn freq_to_index(freq: f64) -> Option<i32> {
    if !freq.is_finite() || freq <= 0.0 {
        return None;
    }
    let idx = f64::from(MIDI_IDX_C0) + 12.0 * (freq / C0_FREQ_HZ).ln() * ONE_OVER_LN_2;
    Some(idx.round() as i32)
}
