//! Parse command implementation
//!
//! Parses note names and prints their pitch class, octave, chromatic index,
//! MIDI note number and frequency.

use anyhow::{Context, Result};
use colored::Colorize;
use notecodec_pitch::{
    index_to_freq, parse_with, to_midi_note, try_parse, AccidentalPolicy, NoteError, Spelling,
};
use std::process::ExitCode;
use tracing::info;

use super::json_output::{note_error_to_json, JsonError, ParseOutput, ParseRecord};

/// Settings shared by every note in one `parse` invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Spelling used for the canonical name
    pub spelling: Spelling,
    /// Which characters count as accidentals
    pub policy: AccidentalPolicy,
    /// Octave to use when a note has none; `None` rejects such notes
    pub default_octave: Option<i32>,
}

/// Parse a single note name into an output record.
///
/// Returns a [`JsonError`] for anything the strict parser rejects, except a
/// missing octave when `options.default_octave` is set.
pub fn evaluate(input: &str, options: &ParseOptions) -> Result<ParseRecord, JsonError> {
    let (note, octave_defaulted) = match (try_parse(input, options.policy), options.default_octave)
    {
        (Ok(note), _) => (note, false),
        (Err(NoteError::MissingOctave), Some(octave)) => (
            parse_with(input, options.policy).with_default_octave(octave),
            true,
        ),
        (Err(err), _) => return Err(note_error_to_json(input, &err)),
    };

    let chromatic_index = note
        .to_chromatic_index()
        .map_err(|err| note_error_to_json(input, &err))?;
    let pitch_class = note
        .pitch_class
        .ok_or_else(|| note_error_to_json(input, &NoteError::UnparsablePitchClass))?;

    Ok(ParseRecord {
        input: input.to_string(),
        name: note.display_name(options.spelling),
        pitch_class,
        octave: note.octave,
        octave_defaulted,
        chromatic_index,
        midi_note: to_midi_note(&note).ok(),
        frequency_hz: index_to_freq(chromatic_index),
    })
}

/// Parse every note and collect the results.
pub fn evaluate_all(inputs: &[String], options: &ParseOptions) -> ParseOutput {
    ParseOutput::from_outcomes(inputs.iter().map(|input| evaluate(input, options)).collect())
}

/// Run the parse command
///
/// # Arguments
/// * `inputs` - Note names to parse
/// * `options` - Spelling, accidental policy and default octave
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if every note parsed, 1 otherwise
pub fn run(inputs: &[String], options: &ParseOptions, json_output: bool) -> Result<ExitCode> {
    let output = evaluate_all(inputs, options);
    info!(
        parsed = output.results.len(),
        rejected = output.errors.len(),
        "parse finished"
    );

    if json_output {
        let json = serde_json::to_string_pretty(&output)
            .context("Failed to serialize parse output")?;
        println!("{}", json);
    } else {
        print_human(&output);
    }

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn print_human(output: &ParseOutput) {
    for record in &output.results {
        let midi = record
            .midi_note
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        let defaulted = if record.octave_defaulted {
            format!(" {}", "(default octave)".dimmed())
        } else {
            String::new()
        };
        println!(
            "{} {} {} {}{}",
            "+".green(),
            record.input.bold(),
            "->".dimmed(),
            record.name.cyan().bold(),
            defaulted
        );
        println!(
            "    {} {}  {} {}  {} {}  {} {}  {} {:.3} Hz",
            "pitch class:".dimmed(),
            record.pitch_class.index(),
            "octave:".dimmed(),
            record.octave,
            "index:".dimmed(),
            record.chromatic_index,
            "midi:".dimmed(),
            midi,
            "freq:".dimmed(),
            record.frequency_hz
        );
    }

    if !output.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &output.errors {
            println!(
                "  {} {} {}: {}",
                "x".red(),
                error.code.red(),
                error.input.as_deref().unwrap_or_default().bold(),
                error.message
            );
            if let Some(suggestion) = &error.suggestion {
                println!("      {} {}", "hint:".yellow(), suggestion);
            }
        }
    }

    let status = if output.success {
        "SUCCESS".green().bold()
    } else {
        "FAILED".red().bold()
    };
    println!(
        "\n{} {} parsed, {} rejected",
        status,
        output.results.len(),
        output.errors.len()
    );
}
