use triage_core::models::risk::{RiskScore, RiskTier, SubScore};
use triage_core::models::submission::{SubmissionPayload, SummaryStatistics};

#[test]
fn invalid_sub_score_has_no_points() {
    let s = SubScore::invalid();
    assert_eq!(s.points(), 0);
    assert!(!s.is_valid());
}

#[test]
fn total_is_sum_of_sub_scores() {
    let score = RiskScore::from_sub_scores(SubScore::valid(2), SubScore::valid(4), SubScore::valid(2));
    assert_eq!(score.total_score, 8);
    assert!(!score.has_data_quality_issue);
    assert!(score.is_high_risk());
}

#[test]
fn data_quality_flag_over_every_validity_combination() {
    for mask in 0u8..8 {
        let pick = |bit: u8, points: u8| {
            if mask & bit != 0 {
                SubScore::valid(points)
            } else {
                SubScore::invalid()
            }
        };
        let score = RiskScore::from_sub_scores(pick(1, 1), pick(2, 3), pick(4, 1));
        assert_eq!(score.has_data_quality_issue, mask != 0b111, "mask {mask:03b}");
        assert_eq!(
            score.total_score,
            score.age_score + score.bp_score + score.temp_score
        );
    }
}

#[test]
fn tiers_follow_total_score() {
    assert_eq!(RiskTier::from_total(0), RiskTier::Low);
    assert_eq!(RiskTier::from_total(1), RiskTier::Low);
    assert_eq!(RiskTier::from_total(2), RiskTier::Moderate);
    assert_eq!(RiskTier::from_total(3), RiskTier::Moderate);
    assert_eq!(RiskTier::from_total(4), RiskTier::High);
    assert_eq!(RiskTier::from_total(8), RiskTier::High);
}

#[test]
fn risk_score_wire_names_are_camel_case() {
    let score = RiskScore::from_sub_scores(SubScore::invalid(), SubScore::valid(2), SubScore::valid(0));
    let json = serde_json::to_value(score).unwrap();
    assert_eq!(json["ageScore"], 0);
    assert_eq!(json["bpScore"], 2);
    assert_eq!(json["tempScore"], 0);
    assert_eq!(json["totalScore"], 2);
    assert_eq!(json["hasDataQualityIssue"], true);
}

#[test]
fn submission_wire_names_match_grader() {
    let payload = SubmissionPayload {
        high_risk_patients: vec!["P1".into()],
        ..Default::default()
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["high_risk_patients"][0], "P1");
    assert!(json["fever_patients"].as_array().unwrap().is_empty());
    assert!(json["data_quality_issues"].as_array().unwrap().is_empty());
    assert!(!payload.is_empty());
    assert!(SubmissionPayload::default().is_empty());
}

#[test]
fn summary_wire_names_are_camel_case() {
    let json = serde_json::to_value(SummaryStatistics::default()).unwrap();
    for key in ["total", "highRisk", "fever", "dataQuality", "avgRiskScore"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
}
