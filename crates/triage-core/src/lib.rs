//! triage-core
//!
//! Pure domain types for patient risk triage: the raw record as delivered by
//! the record source, parsed vitals, risk scores, and the submission and
//! summary shapes handed to downstream consumers. No scoring logic lives here.

pub mod batch;
pub mod error;
pub mod models;
