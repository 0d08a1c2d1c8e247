//! triage-scoring
//!
//! Patient risk scoring. Pure and synchronous: no I/O, no shared state.
//! Parses each vital sign leniently, awards points per fixed clinical bands,
//! and partitions scored batches into the cohorts used for alerting.

pub mod band;
pub mod cohort;
pub mod error;
pub mod parse;
pub mod scoring;
pub mod vitals;

use band::ScoreBand;
use triage_core::models::patient::RawPatientRecord;
use triage_core::models::risk::SubScore;

/// Trait implemented by each vital sign that contributes to the risk score.
pub trait VitalSign: Send + Sync {
    /// Unique identifier for this vital sign (e.g., "age", "blood_pressure").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Blood Pressure").
    fn name(&self) -> &str;

    /// The point bands this vital sign awards, lowest first.
    fn bands(&self) -> &[ScoreBand];

    /// Parse this vital from the record and award points. Never fails: an
    /// unusable field yields [`SubScore::invalid`].
    fn assess(&self, record: &RawPatientRecord) -> SubScore;

    /// Format the bands as plain text for display.
    fn describe(&self) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for band in self.bands() {
            output.push_str(&format!(
                "- {} ({}): {} point{}\n",
                band.label,
                band.criteria,
                band.points,
                if band.points == 1 { "" } else { "s" },
            ));
        }
        output.push_str("- Invalid or missing: 0 points, flagged as a data quality issue\n");
        output
    }
}

/// Return all vital signs, in scoring order.
pub fn all_vital_signs() -> Vec<Box<dyn VitalSign>> {
    vec![
        Box::new(vitals::age::AgeVital),
        Box::new(vitals::blood_pressure::BloodPressureVital),
        Box::new(vitals::temperature::TemperatureVital),
    ]
}

/// Look up a vital sign by ID.
pub fn get_vital_sign(id: &str) -> Option<Box<dyn VitalSign>> {
    all_vital_signs().into_iter().find(|v| v.id() == id)
}
