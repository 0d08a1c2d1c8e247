use std::sync::LazyLock;

use triage_core::models::patient::{FieldValue, RawPatientRecord};
use triage_core::models::risk::SubScore;
use triage_core::models::vital::ParsedVital;

use crate::VitalSign;
use crate::band::ScoreBand;
use crate::parse::{matches_sentinel, parse_int_prefix};

pub const MIN_AGE: f64 = 0.0;
pub const MAX_AGE: f64 = 150.0;
pub const MIDDLE_AGE_START: f64 = 40.0;
/// Ages strictly above this score as elderly.
pub const MIDDLE_AGE_END: f64 = 65.0;

const PLACEHOLDERS: &[&str] = &["unknown", "n/a", "null"];

/// Parse an age in years.
///
/// Numbers are taken as-is. Strings are read up to the first non-digit, so a
/// fractional string age is truncated while a fractional number is not.
pub fn parse_age(value: Option<&FieldValue>) -> ParsedVital<f64> {
    let age = match value {
        None | Some(FieldValue::Other(_)) => return ParsedVital::Invalid,
        Some(FieldValue::Number(n)) => *n,
        Some(FieldValue::Text(s)) => {
            let trimmed = s.trim();
            if matches_sentinel(trimmed, PLACEHOLDERS) {
                return ParsedVital::Invalid;
            }
            match parse_int_prefix(trimmed) {
                Some(n) => n,
                None => return ParsedVital::Invalid,
            }
        }
    };

    if age.is_finite() && (MIN_AGE..=MAX_AGE).contains(&age) {
        ParsedVital::Valid(age)
    } else {
        ParsedVital::Invalid
    }
}

/// Under 40 and 40–65 both score 1; only over 65 scores higher.
pub fn age_points(age: f64) -> u8 {
    if age > MIDDLE_AGE_END { 2 } else { 1 }
}

pub struct AgeVital;

impl VitalSign for AgeVital {
    fn id(&self) -> &str {
        "age"
    }

    fn name(&self) -> &str {
        "Age"
    }

    fn bands(&self) -> &[ScoreBand] {
        static BANDS: LazyLock<Vec<ScoreBand>> = LazyLock::new(|| {
            vec![
                ScoreBand::new("Under 40", format!("< {MIDDLE_AGE_START} years"), 1),
                ScoreBand::new(
                    "40-65",
                    format!("{MIDDLE_AGE_START}-{MIDDLE_AGE_END} years, inclusive"),
                    1,
                ),
                ScoreBand::new("Over 65", format!("> {MIDDLE_AGE_END} years"), 2),
            ]
        });
        &BANDS
    }

    fn assess(&self, record: &RawPatientRecord) -> SubScore {
        match parse_age(record.age.as_ref()) {
            ParsedVital::Valid(age) => SubScore::valid(age_points(age)),
            ParsedVital::Invalid => SubScore::invalid(),
        }
    }
}
