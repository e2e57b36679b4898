//! Output record types for the parse, name and table commands.

use notecodec_pitch::PitchClass;
use serde::{Deserialize, Serialize};

use super::JsonError;

/// One successfully parsed note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseRecord {
    /// The note name as given
    pub input: String,
    /// Canonical name in the requested spelling (e.g., "Db4")
    pub name: String,
    /// Pitch class (sharp spelling)
    pub pitch_class: PitchClass,
    /// Octave, possibly filled in from --default-octave
    pub octave: i32,
    /// Whether the octave was filled in from --default-octave
    pub octave_defaulted: bool,
    /// Chromatic index (C4 = 60)
    pub chromatic_index: i32,
    /// MIDI note number, absent when the index is outside 0..=127
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midi_note: Option<u8>,
    /// Frequency in Hz (A4 = 440)
    pub frequency_hz: f64,
}

/// JSON output for the `parse` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseOutput {
    /// Whether every note parsed
    pub success: bool,
    /// Parsed notes, in input order
    pub results: Vec<ParseRecord>,
    /// One error per rejected note
    pub errors: Vec<JsonError>,
}

impl ParseOutput {
    /// Builds the output from per-note outcomes.
    pub fn from_outcomes(outcomes: Vec<Result<ParseRecord, JsonError>>) -> Self {
        let mut results = Vec::new();
        let mut errors = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(record) => results.push(record),
                Err(error) => errors.push(error),
            }
        }
        Self {
            success: errors.is_empty(),
            results,
            errors,
        }
    }
}

/// One chromatic index rendered as a note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NameRecord {
    /// The chromatic index as given
    pub index: i32,
    /// Note name in the requested spelling
    pub name: String,
    /// Pitch class (sharp spelling)
    pub pitch_class: PitchClass,
    /// Octave
    pub octave: i32,
    /// MIDI note number, absent when the index is outside 0..=127
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midi_note: Option<u8>,
    /// Frequency in Hz (A4 = 440)
    pub frequency_hz: f64,
}

/// JSON output for the `name` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NameOutput {
    /// Always true; every integer names a note
    pub success: bool,
    /// Rendered notes, in input order
    pub results: Vec<NameRecord>,
}

/// One row of the pitch class table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PitchClassRecord {
    /// Position within the octave (C = 0)
    pub index: u8,
    /// Sharp spelling
    pub sharp: String,
    /// Flat spelling
    pub flat: String,
    /// Whether the class is written with an accidental
    pub accidental: bool,
}

/// JSON output for the `table` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableOutput {
    /// Whether the command succeeded
    pub success: bool,
    /// The 12 pitch classes, C first
    pub results: Vec<PitchClassRecord>,
}
