//! Constants for chromatic index and frequency conversion.

/// Chromatic index of C0.
pub const MIDI_IDX_C0: i32 = 12;

/// Chromatic index of C4 (middle C).
pub const MIDI_IDX_C4: i32 = 60;

/// Chromatic index of A4, the 440 Hz tuning reference.
pub const MIDI_IDX_A4: i32 = 69;

/// Distance in semitones from C0 up to A4.
pub const A4_MIDI_IDX_OFFSET: i32 = MIDI_IDX_A4 - MIDI_IDX_C0;

/// Highest note number a 7-bit MIDI data byte can carry.
pub const MIDI_NOTE_MAX: i32 = 127;

/// Octave holding middle C in this crate's naming (C4 = 60).
///
/// Some MIDI software (JUCE among them) names middle C "C3" instead.
pub const MIDDLE_C_DEFAULT_OCTAVE: i32 = 4;

/// Frequency of A4 in Hz.
pub const A4_FREQ_HZ: f64 = 440.0;

/// Ratio that rebases a frequency anchored at A4 onto C0: `2^(-57/12)`.
pub const REF_FREQ_CHROMATIC_CONVERT_TO_C0: f64 = 0.037_162_722_343_835_03;

/// `1 / ln 2`, for turning natural logarithms into octaves.
pub const ONE_OVER_LN_2: f64 = std::f64::consts::LOG2_E;

/// Frequency of C0 in Hz (about 16.35 Hz).
pub const C0_FREQ_HZ: f64 = A4_FREQ_HZ * REF_FREQ_CHROMATIC_CONVERT_TO_C0;
