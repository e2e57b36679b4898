//! CLI argument definitions for the notecodec command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{ArgAction, Parser, Subcommand};

/// notecodec - Note name and chromatic index conversion
#[derive(Parser)]
#[command(name = "notecodec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Parse note names into pitch class, octave and chromatic index
    Parse {
        /// Note names (e.g., C4, C#4, Bb3)
        #[arg(required = true)]
        notes: Vec<String>,

        /// Render canonical names with flats instead of sharps
        #[arg(long)]
        flat: bool,

        /// Also accept uppercase 'B' as a flat (e.g., EB4)
        #[arg(long)]
        permissive: bool,

        /// Octave for notes written without one; bare flag means 4, otherwise
        /// write --default-octave=N
        #[arg(long, require_equals = true, allow_negative_numbers = true)]
        default_octave: Option<Option<i32>>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render chromatic indices (MIDI note numbers) as note names
    Name {
        /// Chromatic indices (C4 = 60)
        #[arg(required = true, allow_negative_numbers = true)]
        indices: Vec<i32>,

        /// Use flat spellings instead of sharps
        #[arg(long)]
        flat: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the 12 pitch classes with sharp and flat spellings
    Table {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
