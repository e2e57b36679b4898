//! Tests for note parsing, index conversion and frequency functions.

use super::*;
use crate::error::NoteError;
use pretty_assertions::assert_eq;

fn note(pitch_class: Option<PitchClass>, octave: i32, octave_valid: bool) -> NoteAndOctave {
    NoteAndOctave {
        pitch_class,
        octave,
        octave_valid,
    }
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_naturals() {
    assert_eq!(parse("C4"), note(Some(PitchClass::C), 4, true));
    assert_eq!(parse("A4"), note(Some(PitchClass::A), 4, true));
    assert_eq!(parse("B0"), note(Some(PitchClass::B), 0, true));
}

#[test]
fn test_parse_sharp() {
    let n = parse("C#4");
    assert_eq!(n, note(Some(PitchClass::Cs), 4, true));
    assert_eq!(n.to_chromatic_index(), Ok(61));
}

#[test]
fn test_parse_flat_matches_sharp() {
    assert_eq!(parse("Db4"), parse("C#4"));
    assert_eq!(parse("Bb3"), note(Some(PitchClass::As), 3, true));
    assert_eq!(parse("Gb2"), note(Some(PitchClass::Fs), 2, true));
}

#[test]
fn test_parse_empty_string() {
    assert_eq!(parse(""), note(None, 0, false));
}

#[test]
fn test_parse_letter_without_octave() {
    assert_eq!(parse("C"), note(Some(PitchClass::C), 0, false));
    assert_eq!(parse("C#"), note(Some(PitchClass::Cs), 0, false));
    assert_eq!(parse("Eb"), note(Some(PitchClass::Ds), 0, false));
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!(parse("c4"), parse("C4"));
    assert_eq!(parse("c#4"), parse("C#4"));
    assert_eq!(parse("db4"), parse("Db4"));
    assert_eq!(parse("bb3"), parse("Bb3"));
}

#[test]
fn test_parse_negative_octave() {
    let n = parse("C-1");
    assert_eq!(n, note(Some(PitchClass::C), -1, true));
    assert_eq!(n.to_chromatic_index(), Ok(0));
    assert_eq!(parse("A#-2"), note(Some(PitchClass::As), -2, true));
}

#[test]
fn test_parse_multi_digit_octave() {
    let n = parse("C10");
    assert_eq!(n, note(Some(PitchClass::C), 10, true));
    assert_eq!(n.to_chromatic_index(), Ok(132));
}

#[test]
fn test_parse_unknown_letter_keeps_octave() {
    assert_eq!(parse("H4"), note(None, 4, true));
    assert_eq!(parse("#4"), note(None, 4, true));
}

#[test]
fn test_parse_spellings_missing_from_tables() {
    // Neither table spells E# or Cb.
    assert_eq!(parse("E#4"), note(None, 4, true));
    assert_eq!(parse("Cb4"), note(None, 4, true));
}

#[test]
fn test_parse_uppercase_b_accidental_strict() {
    // 'B' is the letter B here, so "B4" is octave text with no leading digit.
    assert_eq!(parse("CB4"), note(Some(PitchClass::C), 0, false));
    assert_eq!(parse("BB3"), note(Some(PitchClass::B), 0, false));
}

#[test]
fn test_parse_uppercase_b_accidental_permissive() {
    let permissive = AccidentalPolicy::Permissive;
    // "CB" looks up Cb in the flat table, which has no such entry.
    assert_eq!(parse_with("CB4", permissive), note(None, 4, true));
    assert_eq!(
        parse_with("BB3", permissive),
        note(Some(PitchClass::As), 3, true)
    );
    assert_eq!(
        parse_with("EB4", permissive),
        note(Some(PitchClass::Ds), 4, true)
    );
    // A bare B is still the note B.
    assert_eq!(parse_with("B4", permissive), parse("B4"));
}

#[test]
fn test_parse_octave_uses_leading_integer() {
    assert_eq!(parse("C4abc"), note(Some(PitchClass::C), 4, true));
    assert_eq!(parse("C+4"), note(Some(PitchClass::C), 4, true));
    assert_eq!(parse("C#4.5"), note(Some(PitchClass::Cs), 4, true));
    assert_eq!(parse("CX"), note(Some(PitchClass::C), 0, false));
    assert_eq!(parse("C-"), note(Some(PitchClass::C), 0, false));
    assert_eq!(parse("C 4"), note(Some(PitchClass::C), 0, false));
}

#[test]
fn test_parse_octave_saturates() {
    assert_eq!(parse("C99999999999").octave, i32::MAX);
    assert_eq!(parse("C-99999999999").octave, i32::MIN);
    assert_eq!(
        parse("C99999999999").to_chromatic_index(),
        Err(NoteError::IndexOverflow)
    );
    assert_eq!(
        parse("C-99999999999").to_chromatic_index(),
        Err(NoteError::IndexOverflow)
    );
}

#[test]
fn test_parse_non_ascii_does_not_panic() {
    assert_eq!(parse("é4"), note(None, 4, true));
    assert_eq!(parse("Cé"), note(Some(PitchClass::C), 0, false));
    assert_eq!(parse("C♯4"), note(Some(PitchClass::C), 0, false));
    assert_eq!(parse("🎵"), note(None, 0, false));
}

#[test]
fn test_scan_leading_int() {
    assert_eq!(scan_leading_int(""), None);
    assert_eq!(scan_leading_int("+"), None);
    assert_eq!(scan_leading_int("--1"), None);
    assert_eq!(scan_leading_int("007"), Some(7));
    assert_eq!(scan_leading_int("-0"), Some(0));
    assert_eq!(scan_leading_int("12-3"), Some(12));
    assert_eq!(scan_leading_int("2147483647"), Some(i32::MAX));
    assert_eq!(scan_leading_int("-2147483648"), Some(i32::MIN));
    assert_eq!(scan_leading_int("2147483648"), Some(i32::MAX));
}

// ============================================================================
// try_parse / FromStr
// ============================================================================

#[test]
fn test_try_parse_errors() {
    let strict = AccidentalPolicy::Strict;
    assert_eq!(try_parse("", strict), Err(NoteError::UnparsablePitchClass));
    assert_eq!(try_parse("H4", strict), Err(NoteError::UnparsablePitchClass));
    assert_eq!(try_parse("C", strict), Err(NoteError::MissingOctave));
    assert_eq!(
        try_parse("CB4", strict),
        Err(NoteError::AmbiguousAccidental {
            input: "CB4".to_string()
        })
    );
    assert_eq!(
        try_parse("CB4", AccidentalPolicy::Permissive),
        Err(NoteError::UnparsablePitchClass)
    );
}

#[test]
fn test_from_str() {
    let n: NoteAndOctave = "F#3".parse().unwrap();
    assert_eq!(n, NoteAndOctave::new(PitchClass::Fs, 3));
    assert_eq!(
        "G".parse::<NoteAndOctave>(),
        Err(NoteError::MissingOctave)
    );
}

// ============================================================================
// Chromatic index conversion
// ============================================================================

#[test]
fn test_anchor_indices() {
    assert_eq!(parse("C0").to_chromatic_index(), Ok(MIDI_IDX_C0));
    assert_eq!(parse("C4").to_chromatic_index(), Ok(MIDI_IDX_C4));
    assert_eq!(parse("A4").to_chromatic_index(), Ok(MIDI_IDX_A4));
    assert_eq!(MIDI_IDX_A4 - MIDI_IDX_C0, A4_MIDI_IDX_OFFSET);
}

#[test]
fn test_to_chromatic_index_rejects_invalid_notes() {
    assert_eq!(
        parse("H4").to_chromatic_index(),
        Err(NoteError::UnparsablePitchClass)
    );
    assert_eq!(
        parse("C").to_chromatic_index(),
        Err(NoteError::MissingOctave)
    );
    assert_eq!(
        NoteAndOctave::unknown().to_chromatic_index(),
        Err(NoteError::UnparsablePitchClass)
    );
}

#[test]
fn test_chromatic_roundtrip() {
    for octave in -2..=9 {
        for pc in PitchClass::ALL {
            let n = NoteAndOctave::new(pc, octave);
            let idx = to_chromatic_index(&n).unwrap();
            assert_eq!(
                from_chromatic_index(idx),
                n,
                "Roundtrip failed for {} (index {})",
                n,
                idx
            );
        }
    }
}

#[test]
fn test_from_chromatic_index_below_c0() {
    assert_eq!(from_chromatic_index(11), NoteAndOctave::new(PitchClass::B, -1));
    assert_eq!(from_chromatic_index(0), NoteAndOctave::new(PitchClass::C, -1));
    assert_eq!(from_chromatic_index(-12), NoteAndOctave::new(PitchClass::C, -2));
    assert_eq!(from_chromatic_index(-13), NoteAndOctave::new(PitchClass::B, -3));
}

#[test]
fn test_from_chromatic_index_extremes() {
    let low = from_chromatic_index(i32::MIN);
    let high = from_chromatic_index(i32::MAX);
    assert!(low.is_valid());
    assert!(high.is_valid());
    assert!(low.octave < 0);
    assert!(high.octave > 0);
}

#[test]
fn test_to_chromatic_index_at_i32_bounds() {
    let highest = NoteAndOctave::new(PitchClass::G, 178_956_969);
    assert_eq!(highest.to_chromatic_index(), Ok(i32::MAX));
    assert_eq!(from_chromatic_index(i32::MAX), highest);
    assert_eq!(
        NoteAndOctave::new(PitchClass::Gs, 178_956_969).to_chromatic_index(),
        Err(NoteError::IndexOverflow)
    );
    assert_eq!(
        parse("C178956970").to_chromatic_index(),
        Err(NoteError::IndexOverflow)
    );

    let lowest = NoteAndOctave::new(PitchClass::E, -178_956_972);
    assert_eq!(lowest.to_chromatic_index(), Ok(i32::MIN));
    assert_eq!(from_chromatic_index(i32::MIN), lowest);
    assert_eq!(
        NoteAndOctave::new(PitchClass::Ds, -178_956_972).to_chromatic_index(),
        Err(NoteError::IndexOverflow)
    );
}

#[test]
fn test_midi_note_conversion() {
    assert_eq!(to_midi_note(&parse("C-1")), Ok(0));
    assert_eq!(to_midi_note(&parse("C#4")), Ok(61));
    assert_eq!(to_midi_note(&parse("G9")), Ok(127));
    assert_eq!(
        to_midi_note(&parse("B-2")),
        Err(NoteError::OutOfMidiRange(-1))
    );
    assert_eq!(to_midi_note(&parse("X4")), Err(NoteError::UnparsablePitchClass));
    for midi in 0..=127u8 {
        assert_eq!(to_midi_note(&from_midi_note(midi)), Ok(midi));
    }
}

#[test]
fn test_transpose() {
    let c4 = parse("C4");
    assert_eq!(c4.transpose(1), Ok(parse("C#4")));
    assert_eq!(c4.transpose(12), Ok(parse("C5")));
    assert_eq!(c4.transpose(-1), Ok(parse("B3")));
    assert_eq!(c4.transpose(-61), Ok(parse("B-2")));
    assert_eq!(parse("H4").transpose(1), Err(NoteError::UnparsablePitchClass));
    assert_eq!(c4.transpose(i32::MAX), Err(NoteError::IndexOverflow));
    assert_eq!(c4.transpose(i32::MIN), Ok(from_chromatic_index(i32::MIN + 60)));
}

// ============================================================================
// Display and defaults
// ============================================================================

#[test]
fn test_display_name() {
    let cs4 = parse("C#4");
    assert_eq!(cs4.to_string(), "C#4");
    assert_eq!(cs4.display_name(Spelling::Flat), "Db4");
    assert_eq!(parse("C-1").to_string(), "C-1");
    assert_eq!(parse("Eb").display_name(Spelling::Flat), "Eb");
    assert_eq!(parse("H4").to_string(), "unknown");
    assert_eq!(NoteAndOctave::unknown().to_string(), "unknown");
}

#[test]
fn test_with_default_octave() {
    assert_eq!(
        parse("A").with_default_octave(MIDDLE_C_DEFAULT_OCTAVE),
        NoteAndOctave::new(PitchClass::A, 4)
    );
    assert_eq!(parse("A2").with_default_octave(7).octave, 2);
    assert_eq!(parse("H").with_default_octave(3), note(None, 3, true));
}

#[test]
fn test_pitch_class_index_sentinel() {
    assert_eq!(parse("D4").pitch_class_index(), 2);
    assert_eq!(parse("H4").pitch_class_index(), PitchClass::UNKNOWN_SENTINEL);
    assert_eq!(parse("C").octave(), None);
    assert_eq!(parse("C3").octave(), Some(3));
}

#[test]
fn test_note_serde() {
    let json = serde_json::to_value(parse("C#4")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"pitch_class": "C#", "octave": 4, "octave_valid": true})
    );
    let json = serde_json::to_value(parse("H")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"pitch_class": null, "octave": 0, "octave_valid": false})
    );
}

// ============================================================================
// Name tables
// ============================================================================

#[test]
fn test_sharp_flat_tables_name_same_class() {
    for idx in ACCIDENTAL_PITCH_CLASSES {
        let sharp = parse(&format!("{}4", SHARP_NOTE_NAMES[idx as usize]));
        let flat = parse(&format!("{}4", FLAT_NOTE_NAMES[idx as usize]));
        assert_eq!(sharp, flat, "index {}", idx);
        assert_eq!(sharp.pitch_class_index(), i32::from(idx));
    }
}

#[test]
fn test_every_table_name_parses() {
    for (idx, name) in SHARP_NOTE_NAMES.iter().enumerate() {
        assert_eq!(parse(name).pitch_class_index(), idx as i32, "{}", name);
        assert_eq!(name_for_pitch_class_sharp(idx as i32), *name);
    }
    for (idx, name) in FLAT_NOTE_NAMES.iter().enumerate() {
        assert_eq!(parse(name).pitch_class_index(), idx as i32, "{}", name);
        assert_eq!(name_for_pitch_class_flat(idx as i32), *name);
    }
}

// ============================================================================
// Frequency
// ============================================================================

#[test]
fn test_reference_frequency_constant() {
    let expected = 2.0_f64.powf(-f64::from(A4_MIDI_IDX_OFFSET) / 12.0);
    assert!((REF_FREQ_CHROMATIC_CONVERT_TO_C0 - expected).abs() < 1e-15);
    assert!((C0_FREQ_HZ - 16.351_597_831_287_414).abs() < 1e-9);
    assert!((ONE_OVER_LN_2 - 1.0 / 2.0_f64.ln()).abs() < 1e-15);
    assert!((8.0_f64.ln() * ONE_OVER_LN_2 - 3.0).abs() < 1e-12);
}

#[test]
fn test_index_to_freq() {
    assert!((index_to_freq(MIDI_IDX_A4) - A4_FREQ_HZ).abs() < 1e-9);
    assert!((index_to_freq(MIDI_IDX_C0) - C0_FREQ_HZ).abs() < 1e-12);
    assert!((index_to_freq(57) - 220.0).abs() < 1e-9);
    assert!((index_to_freq(81) - 880.0).abs() < 1e-9);
}

#[test]
fn test_freq_to_index() {
    assert_eq!(freq_to_index(440.0), Some(69));
    assert_eq!(freq_to_index(261.626), Some(60));
    assert_eq!(freq_to_index(220.0), Some(57));
    assert_eq!(freq_to_index(-1.0), None);
    assert_eq!(freq_to_index(f64::NAN), None);
    assert_eq!(freq_to_index(f64::INFINITY), None);
    for idx in 0..=127 {
        assert_eq!(freq_to_index(index_to_freq(idx)), Some(idx));
    }
}
