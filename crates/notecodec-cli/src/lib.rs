//! notecodec CLI library.
//!
//! Command implementations and logging setup for the `notecodec` binary.
//! Each command builds serializable records first and prints them second, so
//! the records can be checked without capturing stdout.

pub mod commands;
pub mod logging;
