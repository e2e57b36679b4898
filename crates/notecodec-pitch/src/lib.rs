//! notecodec pitch - Note Name Parsing and Chromatic Index Conversion
//!
//! This crate turns human-readable note names (`"C4"`, `"C#4"`, `"Bb3"`) into a
//! structured [`NoteAndOctave`] value and converts that value to and from a
//! linear chromatic index (the MIDI note number).
//!
//! # Conventions
//!
//! - Index 12 is C0, index 60 is C4 (middle C), index 69 is A4 (440 Hz).
//! - `index = octave * 12 + pitch_class + 12`, so C-1 is index 0.
//! - Pitch classes count from C: C = 0, C# = 1, ..., B = 11.
//!
//! Every operation is a pure function. Malformed input never panics; it comes
//! back as a [`NoteAndOctave`] whose fields say what was wrong, or as a
//! [`NoteError`] from the `Result`-returning entry points.
//!
//! # Example
//!
//! ```
//! use notecodec_pitch::{from_chromatic_index, parse, PitchClass};
//!
//! let note = parse("C#4");
//! assert_eq!(note.pitch_class, Some(PitchClass::Cs));
//! assert_eq!(note.to_chromatic_index(), Ok(61));
//!
//! let back = from_chromatic_index(61);
//! assert_eq!(back, note);
//! assert_eq!(back.to_string(), "C#4");
//! ```
//!
//! # Module Structure
//!
//! - [`note`]: name tables, parser, index and frequency conversion
//! - [`error`]: error type and stable error codes

pub mod error;
pub mod note;

// Re-export main types
pub use error::NoteError;
pub use note::{
    freq_to_index, from_chromatic_index, from_midi_note, index_to_freq,
    name_for_pitch_class_flat, name_for_pitch_class_sharp, offset_from_a, offset_from_c, parse,
    parse_with, scan_leading_int, to_chromatic_index, to_midi_note, try_parse, AccidentalPolicy,
    NoteAndOctave, PitchClass, Spelling, FLAT_NOTE_NAMES, MIDI_IDX_A4, MIDI_IDX_C0, MIDI_IDX_C4,
    SHARP_NOTE_NAMES,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
