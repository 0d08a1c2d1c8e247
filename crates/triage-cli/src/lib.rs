//! triage-cli
//!
//! Command-line front end for the scoring engine. Owns all I/O: reading
//! record batches, initialising logging, and printing results.

pub mod config;
pub mod input;
pub mod report;
