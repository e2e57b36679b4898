//! CLI command implementations

pub mod json_output;
pub mod name;
pub mod parse;
pub mod table;
