use triage_cli::report::{scored_rows, to_json, vitals_listing};
use triage_core::models::patient::RawPatientRecord;
use triage_scoring::cohort::process_patients;

#[test]
fn scored_rows_carry_record_score_and_tier() {
    let mut record = RawPatientRecord::new("P1")
        .with_age(70.0)
        .with_blood_pressure("150/95")
        .with_temperature(101.2);
    record
        .extra
        .insert("name".to_string(), serde_json::json!("Doe, Jane"));

    let rows = scored_rows(process_patients(vec![record]));
    let json: serde_json::Value = serde_json::from_str(&to_json(&rows, true).unwrap()).unwrap();

    let row = &json[0];
    assert_eq!(row["patient_id"], "P1");
    assert_eq!(row["name"], "Doe, Jane");
    assert_eq!(row["blood_pressure"], "150/95");
    assert_eq!(row["riskScore"]["totalScore"], 8);
    assert_eq!(row["tier"], "high");
}

#[test]
fn compact_output_is_single_line() {
    let rows = scored_rows(process_patients(vec![RawPatientRecord::new("P1")]));
    assert!(!to_json(&rows, true).unwrap().contains('\n'));
    assert!(to_json(&rows, false).unwrap().contains('\n'));
}

#[test]
fn vitals_listing_covers_every_vital() {
    let listing = vitals_listing();
    assert!(listing.contains("## Age"));
    assert!(listing.contains("## Blood Pressure"));
    assert!(listing.contains("## Temperature"));
}
