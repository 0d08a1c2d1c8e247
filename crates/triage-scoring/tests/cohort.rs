use triage_core::models::patient::RawPatientRecord;
use triage_core::models::submission::{SubmissionPayload, SummaryStatistics};
use triage_scoring::cohort::{
    build_submission, check_submission, process_patients, round_to_hundredths, summarize,
};
use triage_scoring::error::ScoringError;

fn scenario() -> Vec<RawPatientRecord> {
    vec![
        RawPatientRecord::new("DEMO003")
            .with_age(30.0)
            .with_temperature(99.8),
        RawPatientRecord::new("DEMO001")
            .with_age(70.0)
            .with_blood_pressure("150/95")
            .with_temperature(101.2),
        RawPatientRecord::new("DEMO002")
            .with_age("unknown")
            .with_blood_pressure("120/75")
            .with_temperature(98.0),
    ]
}

#[test]
fn end_to_end_scenario() {
    let scored = process_patients(scenario());

    let totals: Vec<u8> = scored.iter().map(|p| p.risk_score.total_score).collect();
    assert_eq!(totals, [2, 8, 2]);

    let payload = build_submission(&scored);
    assert_eq!(payload.high_risk_patients, ["DEMO001"]);
    assert_eq!(payload.fever_patients, ["DEMO001", "DEMO003"]);
    assert_eq!(payload.data_quality_issues, ["DEMO002", "DEMO003"]);

    let stats = summarize(&scored);
    assert_eq!(
        stats,
        SummaryStatistics {
            total: 3,
            high_risk: 1,
            fever: 2,
            data_quality: 2,
            avg_risk_score: 4.0,
        }
    );
    assert!(check_submission(&scored, &payload).is_ok());
}

#[test]
fn output_is_independent_of_input_order() {
    let forward = build_submission(&process_patients(scenario()));
    let mut reversed = scenario();
    reversed.reverse();
    assert_eq!(build_submission(&process_patients(reversed)), forward);
}

#[test]
fn process_preserves_order_and_records() {
    let scored = process_patients(scenario());
    let ids: Vec<_> = scored.iter().map(|p| p.record.patient_id.as_str()).collect();
    assert_eq!(ids, ["DEMO003", "DEMO001", "DEMO002"]);
    assert_eq!(scored[1].record, scenario()[1]);
}

#[test]
fn cohorts_overlap() {
    let scored = process_patients(vec![
        RawPatientRecord::new("P1")
            .with_age("unknown")
            .with_blood_pressure("160/100")
            .with_temperature(102.0),
    ]);
    let payload = build_submission(&scored);
    assert_eq!(payload.high_risk_patients, ["P1"]);
    assert_eq!(payload.fever_patients, ["P1"]);
    assert_eq!(payload.data_quality_issues, ["P1"]);
}

#[test]
fn high_risk_threshold_is_four() {
    let scored = process_patients(vec![
        // 1 + 3 + 0
        RawPatientRecord::new("B")
            .with_age(50.0)
            .with_blood_pressure("130/70")
            .with_temperature(98.0),
        // 1 + 2 + 0
        RawPatientRecord::new("A")
            .with_age(50.0)
            .with_blood_pressure("125/70")
            .with_temperature(98.0),
    ]);
    assert_eq!(build_submission(&scored).high_risk_patients, ["B"]);
}

#[test]
fn lists_sort_by_code_point() {
    let ids = ["b", "B", "a10", "a2", "Z"];
    let scored = process_patients(ids.iter().map(|id| RawPatientRecord::new(*id)).collect());
    let payload = build_submission(&scored);
    assert_eq!(payload.data_quality_issues, ["B", "Z", "a10", "a2", "b"]);
}

#[test]
fn duplicate_ids_appear_once() {
    let scored = process_patients(vec![RawPatientRecord::new("P1"), RawPatientRecord::new("P1")]);
    assert_eq!(build_submission(&scored).data_quality_issues, ["P1"]);
    assert_eq!(summarize(&scored).data_quality, 2);
}

#[test]
fn empty_batch() {
    let scored = process_patients(Vec::new());
    assert_eq!(build_submission(&scored), SubmissionPayload::default());
    assert_eq!(summarize(&scored), SummaryStatistics::default());
    assert_eq!(summarize(&scored).avg_risk_score, 0.0);
    assert_eq!(
        check_submission(&scored, &SubmissionPayload::default()),
        Err(ScoringError::NoPatients)
    );
}

#[test]
fn submission_with_no_cohorts_is_rejected() {
    let scored = process_patients(vec![
        RawPatientRecord::new("P1")
            .with_age(30.0)
            .with_blood_pressure("110/70")
            .with_temperature(98.6),
    ]);
    let payload = build_submission(&scored);
    assert!(payload.is_empty());
    assert_eq!(
        check_submission(&scored, &payload),
        Err(ScoringError::EmptySubmission)
    );
}

#[test]
fn average_rounds_half_away_from_zero() {
    assert_eq!(round_to_hundredths(0.125), 0.13);
    assert_eq!(round_to_hundredths(2.0 / 3.0), 0.67);
    assert_eq!(round_to_hundredths(4.0), 4.0);

    // One record scoring 1 and seven scoring 0: mean is exactly 0.125.
    let mut records = vec![RawPatientRecord::new("P0").with_age(30.0)];
    records.extend((1..8).map(|i| RawPatientRecord::new(format!("P{i}"))));
    assert_eq!(summarize(&process_patients(records)).avg_risk_score, 0.13);
}
