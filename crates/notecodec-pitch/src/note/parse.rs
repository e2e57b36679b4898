//! Note name parsing.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::table::{PitchClass, FLAT_NOTE_NAMES, SHARP_NOTE_NAMES};
use super::value::NoteAndOctave;
use crate::error::NoteError;

/// Which characters count as an accidental after the note letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccidentalPolicy {
    /// `#` for sharp and lowercase `b` for flat.
    ///
    /// An uppercase `B` after the letter is not an accidental, so `"CB4"` reads
    /// as the letter C followed by unparsable octave text.
    #[default]
    Strict,
    /// `#` for sharp, `b` or `B` for flat.
    ///
    /// Accepts all-caps input such as `"EB4"`, at the cost of reading `"CB4"`
    /// as the nonexistent name Cb.
    Permissive,
}

impl AccidentalPolicy {
    fn is_accidental(self, c: char) -> bool {
        match self {
            AccidentalPolicy::Strict => matches!(c, '#' | 'b'),
            AccidentalPolicy::Permissive => matches!(c, '#' | 'b' | 'B'),
        }
    }
}

/// Parse a note name with [`AccidentalPolicy::Strict`].
///
/// Never fails: an unrecognised note name leaves `pitch_class` as `None`, and
/// a missing or non-numeric octave leaves `octave_valid` false.
///
/// # Examples
/// ```
/// use notecodec_pitch::{parse, PitchClass};
///
/// let note = parse("Db4");
/// assert_eq!(note.pitch_class, Some(PitchClass::Cs));
/// assert_eq!(note.octave, 4);
/// assert!(note.octave_valid);
///
/// assert_eq!(parse("H4").pitch_class, None);
/// assert!(!parse("C").octave_valid);
/// ```
pub fn parse(input: &str) -> NoteAndOctave {
    parse_with(input, AccidentalPolicy::Strict)
}

/// Parse a note name using the given accidental policy.
///
/// The character after the note letter decides the layout: if it is an
/// accidental, the name is two characters long, otherwise one. Everything
/// after the name is octave text, read with [`scan_leading_int`]. The name is
/// matched case-insensitively against the sharp table (`#` or no accidental)
/// or the flat table (flat accidental).
pub fn parse_with(input: &str, policy: AccidentalPolicy) -> NoteAndOctave {
    let mut chars = input.char_indices();
    let Some((_, letter)) = chars.next() else {
        trace!(input, "empty note name");
        return NoteAndOctave::unknown();
    };

    let accidental = chars
        .next()
        .map(|(_, c)| c)
        .filter(|c| policy.is_accidental(*c));

    // Accidentals are ASCII, so the split point stays on a char boundary.
    let name_len = letter.len_utf8() + accidental.map_or(0, char::len_utf8);
    let (name, octave_text) = input.split_at(name_len);

    let table = match accidental {
        Some('#') | None => &SHARP_NOTE_NAMES,
        Some(_) => &FLAT_NOTE_NAMES,
    };
    let pitch_class = table
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name))
        .map(|pos| PitchClass::from_index(pos as i32));

    let (octave, octave_valid) = match scan_leading_int(octave_text) {
        Some(octave) => (octave, true),
        None => (0, false),
    };

    let note = NoteAndOctave {
        pitch_class,
        octave,
        octave_valid,
    };
    trace!(input, ?policy, ?note, "parsed note name");
    note
}

/// Parse a note name, rejecting anything that is not a complete note.
///
/// Errors are checked in order: an uppercase `B` accidental refused by the
/// strict policy, then an unknown pitch class, then a missing octave.
///
/// # Examples
/// ```
/// use notecodec_pitch::{try_parse, AccidentalPolicy, NoteError};
///
/// assert!(try_parse("Bb3", AccidentalPolicy::Strict).is_ok());
/// assert_eq!(
///     try_parse("H4", AccidentalPolicy::Strict),
///     Err(NoteError::UnparsablePitchClass)
/// );
/// assert!(matches!(
///     try_parse("EB4", AccidentalPolicy::Strict),
///     Err(NoteError::AmbiguousAccidental { .. })
/// ));
/// assert!(try_parse("EB4", AccidentalPolicy::Permissive).is_ok());
/// ```
pub fn try_parse(input: &str, policy: AccidentalPolicy) -> Result<NoteAndOctave, NoteError> {
    let note = parse_with(input, policy);

    let result = if policy == AccidentalPolicy::Strict && input.chars().nth(1) == Some('B') {
        Err(NoteError::AmbiguousAccidental {
            input: input.to_string(),
        })
    } else if note.pitch_class.is_none() {
        Err(NoteError::UnparsablePitchClass)
    } else if !note.octave_valid {
        Err(NoteError::MissingOctave)
    } else {
        Ok(note)
    };

    if let Err(err) = &result {
        debug!(input, code = err.code(), %err, "rejected note name");
    }
    result
}

/// Scan a signed base-10 integer from the start of `text`.
///
/// Accepts one optional `+` or `-` followed by ASCII digits, and stops at the
/// first character that is not a digit. Returns `None` if no digit was read.
/// Values beyond the `i32` range saturate.
///
/// # Examples
/// ```
/// use notecodec_pitch::scan_leading_int;
///
/// assert_eq!(scan_leading_int("4"), Some(4));
/// assert_eq!(scan_leading_int("-1"), Some(-1));
/// assert_eq!(scan_leading_int("10abc"), Some(10));
/// assert_eq!(scan_leading_int("x4"), None);
/// assert_eq!(scan_leading_int("-"), None);
/// ```
pub fn scan_leading_int(text: &str) -> Option<i32> {
    let bytes = text.as_bytes();
    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    // One past i32::MAX is enough headroom for both signs to saturate.
    let limit = i64::from(i32::MAX) + 1;
    let mut value: i64 = 0;
    let mut seen_digit = false;
    for &b in digits.iter().take_while(|b| b.is_ascii_digit()) {
        seen_digit = true;
        value = (value * 10 + i64::from(b - b'0')).min(limit);
    }

    if !seen_digit {
        return None;
    }
    let value = if negative { -value } else { value };
    Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}
