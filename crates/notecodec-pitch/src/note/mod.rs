//! Note name parsing and chromatic index conversion.
//!
//! This module provides deterministic conversion between note names, the
//! structured [`NoteAndOctave`] value, chromatic indices (MIDI note numbers),
//! and frequencies.

mod constants;
mod frequency;
mod index;
mod parse;
mod table;
mod value;

#[cfg(test)]
mod tests;

pub use constants::{
    A4_FREQ_HZ, A4_MIDI_IDX_OFFSET, C0_FREQ_HZ, MIDDLE_C_DEFAULT_OCTAVE, MIDI_IDX_A4, MIDI_IDX_C0,
    MIDI_IDX_C4, MIDI_NOTE_MAX, ONE_OVER_LN_2, REF_FREQ_CHROMATIC_CONVERT_TO_C0,
};

pub use frequency::{freq_to_index, index_to_freq};

pub use index::{from_chromatic_index, from_midi_note, to_chromatic_index, to_midi_note};

pub use parse::{parse, parse_with, scan_leading_int, try_parse, AccidentalPolicy};

pub use table::{
    is_flat_spelled, is_sharp_spelled, name_for_pitch_class_flat, name_for_pitch_class_sharp,
    offset_from_a, offset_from_c, PitchClass, Spelling, ACCIDENTAL_PITCH_CLASSES,
    FLAT_NOTE_NAMES, NATURAL_PITCH_CLASSES, SHARP_NOTE_NAMES,
};

pub use value::NoteAndOctave;
