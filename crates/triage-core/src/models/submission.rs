use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The three cohort lists sent to the grader. Each list is sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionPayload {
    pub high_risk_patients: Vec<String>,
    pub fever_patients: Vec<String>,
    pub data_quality_issues: Vec<String>,
}

impl SubmissionPayload {
    pub fn is_empty(&self) -> bool {
        self.high_risk_patients.is_empty()
            && self.fever_patients.is_empty()
            && self.data_quality_issues.is_empty()
    }
}

/// Aggregate counts over a scored batch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SummaryStatistics {
    pub total: usize,
    pub high_risk: usize,
    pub fever: usize,
    pub data_quality: usize,
    /// Mean total score, rounded to two decimal places.
    pub avg_risk_score: f64,
}
