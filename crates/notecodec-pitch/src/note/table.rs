//! Pitch classes and their sharp/flat name tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Note names using sharp spellings, indexed by pitch class.
pub const SHARP_NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Note names using flat spellings, indexed by pitch class.
pub const FLAT_NOTE_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Pitch classes spelled with an accidental (the black keys).
pub const ACCIDENTAL_PITCH_CLASSES: [u8; 5] = [1, 3, 6, 8, 10];

/// Pitch classes spelled with a bare letter (the white keys).
pub const NATURAL_PITCH_CLASSES: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// One of the 12 equal-tempered steps within an octave, counted from C.
///
/// Serialized using the sharp spelling (`"C#"`, not `"Cs"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum PitchClass {
    #[serde(rename = "C")]
    C = 0,
    #[serde(rename = "C#")]
    Cs = 1,
    #[serde(rename = "D")]
    D = 2,
    #[serde(rename = "D#")]
    Ds = 3,
    #[serde(rename = "E")]
    E = 4,
    #[serde(rename = "F")]
    F = 5,
    #[serde(rename = "F#")]
    Fs = 6,
    #[serde(rename = "G")]
    G = 7,
    #[serde(rename = "G#")]
    Gs = 8,
    #[serde(rename = "A")]
    A = 9,
    #[serde(rename = "A#")]
    As = 10,
    #[serde(rename = "B")]
    B = 11,
}

impl PitchClass {
    /// All pitch classes in ascending order from C.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Integer stand-in for an unknown pitch class in raw integer form.
    pub const UNKNOWN_SENTINEL: i32 = -1;

    /// Returns the pitch class for any integer, reducing it modulo 12.
    ///
    /// Negative inputs wrap around, so `-1` is B.
    ///
    /// # Examples
    /// ```
    /// use notecodec_pitch::PitchClass;
    ///
    /// assert_eq!(PitchClass::from_index(1), PitchClass::Cs);
    /// assert_eq!(PitchClass::from_index(13), PitchClass::Cs);
    /// assert_eq!(PitchClass::from_index(-1), PitchClass::B);
    /// ```
    pub fn from_index(idx: i32) -> Self {
        Self::ALL[reduce(idx)]
    }

    /// Position of this class within the octave, 0 (C) to 11 (B).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Name using the sharp spelling (e.g., "C#").
    pub fn sharp_name(self) -> &'static str {
        SHARP_NOTE_NAMES[self as usize]
    }

    /// Name using the flat spelling (e.g., "Db").
    pub fn flat_name(self) -> &'static str {
        FLAT_NOTE_NAMES[self as usize]
    }

    /// Name in the requested spelling.
    pub fn name(self, spelling: Spelling) -> &'static str {
        match spelling {
            Spelling::Sharp => self.sharp_name(),
            Spelling::Flat => self.flat_name(),
        }
    }

    /// Whether this class is conventionally written with a sharp or flat.
    pub fn is_accidental(self) -> bool {
        ACCIDENTAL_PITCH_CLASSES.contains(&self.index())
    }

    /// Whether this class is a bare letter name.
    pub fn is_natural(self) -> bool {
        !self.is_accidental()
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sharp_name())
    }
}

/// Which name table to use when rendering a pitch class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spelling {
    /// C, C#, D, D#, ...
    #[default]
    Sharp,
    /// C, Db, D, Eb, ...
    Flat,
}

fn reduce(idx: i32) -> usize {
    idx.rem_euclid(12) as usize
}

/// Sharp-spelled name for a pitch class index, reduced modulo 12.
///
/// # Examples
/// ```
/// use notecodec_pitch::name_for_pitch_class_sharp;
///
/// assert_eq!(name_for_pitch_class_sharp(1), "C#");
/// assert_eq!(name_for_pitch_class_sharp(22), "A#");
/// ```
pub fn name_for_pitch_class_sharp(idx: i32) -> &'static str {
    SHARP_NOTE_NAMES[reduce(idx)]
}

/// Flat-spelled name for a pitch class index, reduced modulo 12.
///
/// # Examples
/// ```
/// use notecodec_pitch::name_for_pitch_class_flat;
///
/// assert_eq!(name_for_pitch_class_flat(1), "Db");
/// assert_eq!(name_for_pitch_class_flat(-2), "Bb");
/// ```
pub fn name_for_pitch_class_flat(idx: i32) -> &'static str {
    FLAT_NOTE_NAMES[reduce(idx)]
}

/// Sharp-spelled name for an index whose zero point is A rather than C.
///
/// # Examples
/// ```
/// use notecodec_pitch::offset_from_a;
///
/// assert_eq!(offset_from_a(0), "A");
/// assert_eq!(offset_from_a(3), "C");
/// ```
pub fn offset_from_a(idx: i32) -> &'static str {
    name_for_pitch_class_sharp(reduce(idx) as i32 + PitchClass::A as i32)
}

/// Sharp-spelled name for an index whose zero point is C.
pub fn offset_from_c(idx: i32) -> &'static str {
    name_for_pitch_class_sharp(reduce(idx) as i32 + PitchClass::C as i32)
}

/// Whether the pitch class at `idx` (mod 12) is written with a sharp in the sharp table.
pub fn is_sharp_spelled(idx: i32) -> bool {
    name_for_pitch_class_sharp(idx).ends_with('#')
}

/// Whether the pitch class at `idx` (mod 12) is written with a flat in the flat table.
pub fn is_flat_spelled(idx: i32) -> bool {
    name_for_pitch_class_flat(idx).ends_with('b')
}
