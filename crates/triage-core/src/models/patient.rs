use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::risk::RiskScore;

/// A loosely-typed vital sign value as it arrives from the record source.
///
/// Upstream data mixes numbers and strings for the same field (`70`, `"70"`,
/// `"unknown"`). Absent and `null` fields are both `None` on the record. Any
/// other JSON shape (bool, array, object) is kept as `Other` and never parses
/// as a valid vital.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Other(Value),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) | FieldValue::Other(_) => None,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

/// An untrusted patient record.
///
/// Only the three vitals are ever inspected. Everything else (name, visit
/// date, diagnosis, ...) is carried in `extra` and written back out verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawPatientRecord {
    #[serde(default)]
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<FieldValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawPatientRecord {
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            ..Self::default()
        }
    }

    pub fn with_age(mut self, age: impl Into<FieldValue>) -> Self {
        self.age = Some(age.into());
        self
    }

    pub fn with_blood_pressure(mut self, bp: impl Into<FieldValue>) -> Self {
        self.blood_pressure = Some(bp.into());
        self
    }

    pub fn with_temperature(mut self, temp: impl Into<FieldValue>) -> Self {
        self.temperature = Some(temp.into());
        self
    }
}

/// A record paired with the score computed for it in one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPatient {
    #[serde(flatten)]
    pub record: RawPatientRecord,
    #[serde(rename = "riskScore")]
    pub risk_score: RiskScore,
}
