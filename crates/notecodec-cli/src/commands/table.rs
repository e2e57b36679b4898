//! Table command implementation
//!
//! Prints the 12 pitch classes with their sharp and flat spellings.

use anyhow::{Context, Result};
use colored::Colorize;
use notecodec_pitch::PitchClass;
use std::process::ExitCode;

use super::json_output::{PitchClassRecord, TableOutput};

/// Build the table rows, C first.
pub fn rows() -> Vec<PitchClassRecord> {
    PitchClass::ALL
        .iter()
        .map(|pc| PitchClassRecord {
            index: pc.index(),
            sharp: pc.sharp_name().to_string(),
            flat: pc.flat_name().to_string(),
            accidental: pc.is_accidental(),
        })
        .collect()
}

/// Run the table command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let output = TableOutput {
        success: true,
        results: rows(),
    };

    if json_output {
        let json =
            serde_json::to_string_pretty(&output).context("Failed to serialize table output")?;
        println!("{}", json);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{:>5}  {:<5} {:<5}",
        "index".dimmed(),
        "sharp".cyan().bold(),
        "flat".cyan().bold()
    );
    for row in &output.results {
        let line = format!("{:>5}  {:<5} {:<5}", row.index, row.sharp, row.flat);
        if row.accidental {
            println!("{}", line.yellow());
        } else {
            println!("{}", line);
        }
    }

    Ok(ExitCode::SUCCESS)
}
