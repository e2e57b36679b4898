//! notecodec CLI - Command-line interface for note name conversion
//!
//! This binary parses note names, renders chromatic indices back to names,
//! and prints the pitch class tables.

use clap::Parser;
use notecodec_pitch::note::MIDDLE_C_DEFAULT_OCTAVE;
use notecodec_pitch::{AccidentalPolicy, Spelling};
use std::process::ExitCode;

use notecodec_cli::commands;
use notecodec_cli::commands::parse::ParseOptions;
use notecodec_cli::logging;

mod cli_args;

use cli_args::{Cli, Commands};

fn spelling(flat: bool) -> Spelling {
    if flat {
        Spelling::Flat
    } else {
        Spelling::Sharp
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Parse {
            notes,
            flat,
            permissive,
            default_octave,
            json,
        } => {
            let options = ParseOptions {
                spelling: spelling(flat),
                policy: if permissive {
                    AccidentalPolicy::Permissive
                } else {
                    AccidentalPolicy::Strict
                },
                default_octave: default_octave
                    .map(|octave| octave.unwrap_or(MIDDLE_C_DEFAULT_OCTAVE)),
            };
            commands::parse::run(&notes, &options, json)
        }
        Commands::Name {
            indices,
            flat,
            json,
        } => commands::name::run(&indices, spelling(flat), json),
        Commands::Table { json } => commands::table::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
