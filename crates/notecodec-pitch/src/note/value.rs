//! The parsed note value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::index;
use super::parse::{try_parse, AccidentalPolicy};
use super::table::{PitchClass, Spelling};
use crate::error::NoteError;

/// A notated pitch such as "C#4": a pitch class plus an octave.
///
/// Produced by the parser or by [`crate::from_chromatic_index`]. A parser
/// result may be partially invalid:
///
/// - `pitch_class` is `None` when the note name was not recognised.
/// - `octave_valid` is `false` when the input had no numeric octave suffix;
///   `octave` is then 0 and carries no information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteAndOctave {
    /// Pitch class, or `None` if the note name was not recognised.
    pub pitch_class: Option<PitchClass>,
    /// Octave number; C4 is middle C.
    pub octave: i32,
    /// Whether `octave` came from the input.
    pub octave_valid: bool,
}

impl NoteAndOctave {
    /// Creates a fully valid note.
    pub fn new(pitch_class: PitchClass, octave: i32) -> Self {
        Self {
            pitch_class: Some(pitch_class),
            octave,
            octave_valid: true,
        }
    }

    /// A value with neither a pitch class nor an octave.
    pub fn unknown() -> Self {
        Self {
            pitch_class: None,
            octave: 0,
            octave_valid: false,
        }
    }

    /// Whether both the pitch class and the octave are usable.
    pub fn is_valid(&self) -> bool {
        self.pitch_class.is_some() && self.octave_valid
    }

    /// The octave, if the input carried one.
    pub fn octave(&self) -> Option<i32> {
        self.octave_valid.then_some(self.octave)
    }

    /// Pitch class as a raw integer, `-1` when unknown.
    pub fn pitch_class_index(&self) -> i32 {
        self.pitch_class
            .map_or(PitchClass::UNKNOWN_SENTINEL, |pc| i32::from(pc.index()))
    }

    /// Fills in `octave` when the input had none; otherwise returns `self` unchanged.
    ///
    /// # Examples
    /// ```
    /// use notecodec_pitch::{parse, MIDI_IDX_C4};
    /// use notecodec_pitch::note::MIDDLE_C_DEFAULT_OCTAVE;
    ///
    /// let note = parse("C").with_default_octave(MIDDLE_C_DEFAULT_OCTAVE);
    /// assert_eq!(note.to_chromatic_index(), Ok(MIDI_IDX_C4));
    ///
    /// let note = parse("C2").with_default_octave(MIDDLE_C_DEFAULT_OCTAVE);
    /// assert_eq!(note.octave, 2);
    /// ```
    pub fn with_default_octave(self, octave: i32) -> Self {
        if self.octave_valid {
            self
        } else {
            Self {
                octave,
                octave_valid: true,
                ..self
            }
        }
    }

    /// Chromatic index of this note. See [`crate::to_chromatic_index`].
    pub fn to_chromatic_index(&self) -> Result<i32, NoteError> {
        index::to_chromatic_index(self)
    }

    /// Shifts the note by `semitones`, carrying into the octave as needed.
    ///
    /// Fails with [`NoteError::IndexOverflow`] if the result leaves the `i32`
    /// index range.
    ///
    /// # Examples
    /// ```
    /// use notecodec_pitch::{parse, NoteAndOctave, PitchClass};
    ///
    /// let b3 = parse("B3");
    /// assert_eq!(b3.transpose(1), Ok(NoteAndOctave::new(PitchClass::C, 4)));
    /// ```
    pub fn transpose(&self, semitones: i32) -> Result<Self, NoteError> {
        let idx = self.to_chromatic_index()?;
        let moved = idx
            .checked_add(semitones)
            .ok_or(NoteError::IndexOverflow)?;
        Ok(index::from_chromatic_index(moved))
    }

    /// Renders the note in the requested spelling.
    ///
    /// An unknown pitch class renders as `"unknown"`; a missing octave is left off.
    pub fn display_name(&self, spelling: Spelling) -> String {
        match (self.pitch_class, self.octave()) {
            (None, _) => "unknown".to_string(),
            (Some(pc), Some(octave)) => format!("{}{}", pc.name(spelling), octave),
            (Some(pc), None) => pc.name(spelling).to_string(),
        }
    }
}

impl fmt::Display for NoteAndOctave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name(Spelling::Sharp))
    }
}

impl FromStr for NoteAndOctave {
    type Err = NoteError;

    /// Parses with [`AccidentalPolicy::Strict`], rejecting incomplete notes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_parse(s, AccidentalPolicy::Strict)
    }
}
