//! notecodec End-to-End Test Infrastructure
//!
//! This crate holds cross-crate tests for the note codec:
//!
//! - `e2e_parse`: note names through the CLI record builders and JSON output
//! - `proptest_codec`: round-trip and never-panic properties
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p notecodec-tests
//! cargo test -p notecodec-tests --test proptest_codec
//! ```

pub mod fixtures;
