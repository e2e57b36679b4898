//! Error types for note parsing and index conversion.

use thiserror::Error;

/// Errors produced when a parsed note cannot be turned into a pitch.
///
/// Parsing itself never fails (see [`crate::parse`]); these errors surface when
/// a caller asks for something the parsed value cannot provide, such as a
/// chromatic index for a note whose letter was not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// The note-name prefix did not match any entry in the name tables.
    #[error("unknown pitch class")]
    UnparsablePitchClass,

    /// The input had no numeric octave suffix.
    #[error("missing octave")]
    MissingOctave,

    /// An uppercase `B` followed the note letter where a flat was probably meant.
    #[error("ambiguous accidental in {input:?}: use lowercase 'b' for flats")]
    AmbiguousAccidental {
        /// The rejected note name.
        input: String,
    },

    /// The chromatic index does not fit in a 7-bit MIDI note number.
    #[error("chromatic index {0} is outside the MIDI range 0..=127")]
    OutOfMidiRange(i32),

    /// The note lies beyond the range of an `i32` chromatic index.
    #[error("chromatic index does not fit in an i32")]
    IndexOverflow,
}

impl NoteError {
    /// Returns the stable error code string (e.g., "N001").
    pub fn code(&self) -> &'static str {
        match self {
            NoteError::UnparsablePitchClass => "N001",
            NoteError::MissingOctave => "N002",
            NoteError::AmbiguousAccidental { .. } => "N003",
            NoteError::OutOfMidiRange(_) => "N004",
            NoteError::IndexOverflow => "N005",
        }
    }
}
