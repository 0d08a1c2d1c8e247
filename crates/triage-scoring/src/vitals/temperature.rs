use std::sync::LazyLock;

use triage_core::models::patient::{FieldValue, RawPatientRecord};
use triage_core::models::risk::SubScore;
use triage_core::models::vital::ParsedVital;

use crate::VitalSign;
use crate::band::ScoreBand;
use crate::parse::{matches_sentinel, parse_float_prefix};

// All temperatures are Fahrenheit.
pub const MIN_TEMPERATURE: f64 = 90.0;
pub const MAX_TEMPERATURE: f64 = 110.0;
/// Highest temperature that scores as normal.
pub const NORMAL_MAX: f64 = 99.5;
/// Highest temperature that scores as a low fever.
pub const LOW_FEVER_MAX: f64 = 100.9;
pub const HIGH_FEVER_MIN: f64 = 101.0;
/// Lowest temperature counted as a fever.
pub const FEVER_THRESHOLD: f64 = 99.6;

const PLACEHOLDERS: &[&str] = &["temp_error", "invalid", "n/a", "null"];

pub fn parse_temperature(value: Option<&FieldValue>) -> ParsedVital<f64> {
    let temp = match value {
        None | Some(FieldValue::Other(_)) => return ParsedVital::Invalid,
        Some(FieldValue::Number(n)) => *n,
        Some(FieldValue::Text(s)) => {
            let trimmed = s.trim();
            if matches_sentinel(trimmed, PLACEHOLDERS) {
                return ParsedVital::Invalid;
            }
            match parse_float_prefix(trimmed) {
                Some(n) => n,
                None => return ParsedVital::Invalid,
            }
        }
    };

    if temp.is_finite() && (MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temp) {
        ParsedVital::Valid(temp)
    } else {
        ParsedVital::Invalid
    }
}

/// Only readings from [`FEVER_THRESHOLD`] to [`LOW_FEVER_MAX`] score as a low
/// fever. Anything else above [`NORMAL_MAX`], including the gap below the
/// fever threshold, scores as a high fever.
pub fn temperature_points(temp: f64) -> u8 {
    if temp <= NORMAL_MAX {
        0
    } else if (FEVER_THRESHOLD..=LOW_FEVER_MAX).contains(&temp) {
        1
    } else {
        2
    }
}

pub fn is_fever(parsed: ParsedVital<f64>) -> bool {
    matches!(parsed, ParsedVital::Valid(t) if t >= FEVER_THRESHOLD)
}

pub struct TemperatureVital;

impl VitalSign for TemperatureVital {
    fn id(&self) -> &str {
        "temperature"
    }

    fn name(&self) -> &str {
        "Temperature"
    }

    fn bands(&self) -> &[ScoreBand] {
        static BANDS: LazyLock<Vec<ScoreBand>> = LazyLock::new(|| {
            vec![
                ScoreBand::new("Normal", format!("<= {NORMAL_MAX}°F"), 0),
                ScoreBand::new(
                    "Low fever",
                    format!("{FEVER_THRESHOLD}-{LOW_FEVER_MAX}°F"),
                    1,
                ),
                ScoreBand::new(
                    "High fever",
                    format!(">= {HIGH_FEVER_MIN}°F, or above {NORMAL_MAX}°F and below {FEVER_THRESHOLD}°F"),
                    2,
                ),
            ]
        });
        &BANDS
    }

    fn assess(&self, record: &RawPatientRecord) -> SubScore {
        match parse_temperature(record.temperature.as_ref()) {
            ParsedVital::Valid(temp) => SubScore::valid(temperature_points(temp)),
            ParsedVital::Invalid => SubScore::invalid(),
        }
    }
}
