use serde::Serialize;
use triage_core::models::patient::ScoredPatient;
use triage_core::models::risk::RiskTier;
use triage_scoring::all_vital_signs;

/// A scored patient as printed by `triage score`.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRow {
    #[serde(flatten)]
    pub patient: ScoredPatient,
    pub tier: RiskTier,
}

impl From<ScoredPatient> for ScoredRow {
    fn from(patient: ScoredPatient) -> Self {
        let tier = patient.risk_score.tier();
        Self { patient, tier }
    }
}

pub fn scored_rows(patients: Vec<ScoredPatient>) -> Vec<ScoredRow> {
    patients.into_iter().map(ScoredRow::from).collect()
}

pub fn to_json<T: Serialize>(value: &T, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}

/// Plain-text listing of every vital sign and its point bands.
pub fn vitals_listing() -> String {
    all_vital_signs()
        .iter()
        .map(|v| v.describe())
        .collect::<Vec<_>>()
        .join("\n")
}
