use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Outcome of parsing one vital sign field.
///
/// The reason a field failed is not tracked; downstream only
/// cares whether it is usable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedVital<T> {
    Valid(T),
    Invalid,
}

impl<T> ParsedVital<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, ParsedVital::Valid(_))
    }

    pub fn value(self) -> Option<T> {
        match self {
            ParsedVital::Valid(v) => Some(v),
            ParsedVital::Invalid => None,
        }
    }
}

/// A blood pressure reading in mmHg. Both sides are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BloodPressure {
    pub systolic: u32,
    pub diastolic: u32,
}
