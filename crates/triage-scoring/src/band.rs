use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One scoring band of a vital sign, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBand {
    pub label: String,
    pub criteria: String,
    pub points: u8,
}

impl ScoreBand {
    pub fn new(label: &str, criteria: impl Into<String>, points: u8) -> Self {
        Self {
            label: label.to_string(),
            criteria: criteria.into(),
            points,
        }
    }
}
