//! Conversion between notes and chromatic indices.

use super::constants::{MIDI_IDX_C0, MIDI_NOTE_MAX};
use super::table::PitchClass;
use super::value::NoteAndOctave;
use crate::error::NoteError;

/// Convert a note to its chromatic index: `octave * 12 + pitch_class + 12`.
///
/// Index 12 is C0, 60 is C4 and 69 is A4. Every note returned by
/// [`from_chromatic_index`] converts back exactly.
///
/// # Errors
/// - [`NoteError::UnparsablePitchClass`] if the pitch class is unknown.
/// - [`NoteError::MissingOctave`] if the octave did not come from the input;
///   apply a policy with [`NoteAndOctave::with_default_octave`] first.
/// - [`NoteError::IndexOverflow`] if the index does not fit in an `i32`.
///
/// # Examples
/// ```
/// use notecodec_pitch::{parse, to_chromatic_index};
///
/// assert_eq!(to_chromatic_index(&parse("C0")), Ok(12));
/// assert_eq!(to_chromatic_index(&parse("C4")), Ok(60));
/// assert_eq!(to_chromatic_index(&parse("A4")), Ok(69));
/// assert_eq!(to_chromatic_index(&parse("C-1")), Ok(0));
/// ```
pub fn to_chromatic_index(note: &NoteAndOctave) -> Result<i32, NoteError> {
    let pitch_class = note.pitch_class.ok_or(NoteError::UnparsablePitchClass)?;
    let octave = note.octave().ok_or(NoteError::MissingOctave)?;

    let idx = i64::from(octave) * 12 + i64::from(pitch_class.index()) + i64::from(MIDI_IDX_C0);
    i32::try_from(idx).map_err(|_| NoteError::IndexOverflow)
}

/// Convert a chromatic index back to a note.
///
/// Works for any integer, including indices below C0, which land in negative
/// octaves.
///
/// # Examples
/// ```
/// use notecodec_pitch::{from_chromatic_index, NoteAndOctave, PitchClass};
///
/// assert_eq!(from_chromatic_index(69), NoteAndOctave::new(PitchClass::A, 4));
/// assert_eq!(from_chromatic_index(0), NoteAndOctave::new(PitchClass::C, -1));
/// assert_eq!(from_chromatic_index(-1), NoteAndOctave::new(PitchClass::B, -2));
/// ```
pub fn from_chromatic_index(idx: i32) -> NoteAndOctave {
    let relative = i64::from(idx) - i64::from(MIDI_IDX_C0);
    let octave = relative.div_euclid(12) as i32;
    let pitch_class = PitchClass::from_index(relative.rem_euclid(12) as i32);
    NoteAndOctave::new(pitch_class, octave)
}

/// Narrow a note to a 7-bit MIDI note number.
///
/// # Errors
/// Everything [`to_chromatic_index`] rejects, plus
/// [`NoteError::OutOfMidiRange`] for indices outside `0..=127`.
///
/// # Examples
/// ```
/// use notecodec_pitch::{parse, to_midi_note, NoteError};
///
/// assert_eq!(to_midi_note(&parse("C4")), Ok(60));
/// assert_eq!(to_midi_note(&parse("G9")), Ok(127));
/// assert_eq!(to_midi_note(&parse("G#9")), Err(NoteError::OutOfMidiRange(128)));
/// ```
pub fn to_midi_note(note: &NoteAndOctave) -> Result<u8, NoteError> {
    let idx = to_chromatic_index(note)?;
    if (0..=MIDI_NOTE_MAX).contains(&idx) {
        Ok(idx as u8)
    } else {
        Err(NoteError::OutOfMidiRange(idx))
    }
}

/// Convert a MIDI note number to a note.
pub fn from_midi_note(midi_note: u8) -> NoteAndOctave {
    from_chromatic_index(i32::from(midi_note))
}
