//! Conversion from library errors to JSON error records.

use notecodec_pitch::NoteError;

use super::JsonError;

/// Converts a [`NoteError`] for `input` into a [`JsonError`].
pub fn note_error_to_json(input: &str, error: &NoteError) -> JsonError {
    let json = JsonError::new(error.code(), error.to_string()).with_input(input);
    match error {
        NoteError::UnparsablePitchClass => {
            json.with_suggestion("use a letter A-G, optionally followed by '#' or 'b'")
        }
        NoteError::MissingOctave => {
            json.with_suggestion("append an octave number or pass --default-octave")
        }
        NoteError::AmbiguousAccidental { .. } => {
            json.with_suggestion("write flats with lowercase 'b' or pass --permissive")
        }
        NoteError::IndexOverflow => {
            json.with_suggestion("keep the octave within about 178 million of zero")
        }
        NoteError::OutOfMidiRange(_) => json,
    }
}
