//! Name command implementation
//!
//! Renders chromatic indices back to note names.

use anyhow::{Context, Result};
use colored::Colorize;
use notecodec_pitch::{from_chromatic_index, index_to_freq, to_midi_note, PitchClass, Spelling};
use std::process::ExitCode;

use super::json_output::{NameOutput, NameRecord};

/// Render one chromatic index.
pub fn evaluate(index: i32, spelling: Spelling) -> NameRecord {
    let note = from_chromatic_index(index);
    NameRecord {
        index,
        name: note.display_name(spelling),
        // The C0 offset is a whole octave, so the class is just `index mod 12`.
        pitch_class: PitchClass::from_index(index),
        octave: note.octave,
        midi_note: to_midi_note(&note).ok(),
        frequency_hz: index_to_freq(index),
    }
}

/// Run the name command
///
/// # Arguments
/// * `indices` - Chromatic indices to render
/// * `spelling` - Sharp or flat spelling
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: always 0
pub fn run(indices: &[i32], spelling: Spelling, json_output: bool) -> Result<ExitCode> {
    let output = NameOutput {
        success: true,
        results: indices.iter().map(|&i| evaluate(i, spelling)).collect(),
    };

    if json_output {
        let json =
            serde_json::to_string_pretty(&output).context("Failed to serialize name output")?;
        println!("{}", json);
    } else {
        for record in &output.results {
            println!(
                "{:>5} {} {:<6} {} {:.3} Hz",
                record.index,
                "->".dimmed(),
                record.name.cyan().bold(),
                "freq:".dimmed(),
                record.frequency_hz
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
