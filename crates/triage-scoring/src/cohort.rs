//! Batch-level cohort building and summary statistics.
//!
//! Cohorts are independent: one patient may be high risk, febrile, and have
//! a data-quality issue all at once. Every cohort list is sorted by code
//! point so the output is identical regardless of input order.

use tracing::debug;
use triage_core::models::patient::{RawPatientRecord, ScoredPatient};
use triage_core::models::submission::{SubmissionPayload, SummaryStatistics};

use crate::error::ScoringError;
use crate::scoring::{has_fever, score};

/// Pair every record with its score, preserving input order.
pub fn process_patients(records: Vec<RawPatientRecord>) -> Vec<ScoredPatient> {
    debug!(count = records.len(), "scoring patient batch");
    records
        .into_iter()
        .map(|record| {
            let risk_score = score(&record);
            ScoredPatient { record, risk_score }
        })
        .collect()
}

pub fn build_submission(patients: &[ScoredPatient]) -> SubmissionPayload {
    let mut payload = SubmissionPayload::default();

    for patient in patients {
        let id = &patient.record.patient_id;
        if patient.risk_score.is_high_risk() {
            payload.high_risk_patients.push(id.clone());
        }
        if has_fever(&patient.record) {
            payload.fever_patients.push(id.clone());
        }
        if patient.risk_score.has_data_quality_issue {
            payload.data_quality_issues.push(id.clone());
        }
    }

    canonicalize(&mut payload.high_risk_patients);
    canonicalize(&mut payload.fever_patients);
    canonicalize(&mut payload.data_quality_issues);

    debug!(
        high_risk = payload.high_risk_patients.len(),
        fever = payload.fever_patients.len(),
        data_quality = payload.data_quality_issues.len(),
        "built submission"
    );
    payload
}

pub fn summarize(patients: &[ScoredPatient]) -> SummaryStatistics {
    let total = patients.len();
    if total == 0 {
        return SummaryStatistics::default();
    }

    let score_sum: u32 = patients
        .iter()
        .map(|p| u32::from(p.risk_score.total_score))
        .sum();

    SummaryStatistics {
        total,
        high_risk: patients.iter().filter(|p| p.risk_score.is_high_risk()).count(),
        fever: patients.iter().filter(|p| has_fever(&p.record)).count(),
        data_quality: patients
            .iter()
            .filter(|p| p.risk_score.has_data_quality_issue)
            .count(),
        avg_risk_score: round_to_hundredths(f64::from(score_sum) / total as f64),
    }
}

/// Round half away from zero at the second decimal place, so `0.125` becomes
/// `0.13` rather than the banker's `0.12`.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Reject a submission that has nothing to grade. Call before sending;
/// [`build_submission`] itself never fails.
pub fn check_submission(
    patients: &[ScoredPatient],
    payload: &SubmissionPayload,
) -> Result<(), ScoringError> {
    if patients.is_empty() {
        return Err(ScoringError::NoPatients);
    }
    if payload.is_empty() {
        return Err(ScoringError::EmptySubmission);
    }
    Ok(())
}

fn canonicalize(ids: &mut Vec<String>) {
    ids.sort_unstable();
    ids.dedup();
}
