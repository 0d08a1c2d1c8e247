use std::sync::LazyLock;

use triage_core::models::patient::{FieldValue, RawPatientRecord};
use triage_core::models::risk::SubScore;
use triage_core::models::vital::{BloodPressure, ParsedVital};

use crate::VitalSign;
use crate::band::ScoreBand;
use crate::parse::matches_sentinel;

pub const MAX_SYSTOLIC: u32 = 300;
pub const MAX_DIASTOLIC: u32 = 200;

pub const SYSTOLIC_ELEVATED_MIN: u32 = 120;
pub const SYSTOLIC_ELEVATED_MAX: u32 = 129;
pub const SYSTOLIC_STAGE_1_MAX: u32 = 139;

pub const DIASTOLIC_STAGE_1_MIN: u32 = 80;
pub const DIASTOLIC_STAGE_1_MAX: u32 = 89;

const PLACEHOLDERS: &[&str] = &["invalid", "n/a", "null"];

/// Parse a `"<systolic>/<diastolic>"` reading. Both sides must be present
/// and in range, otherwise the whole reading is invalid.
pub fn parse_blood_pressure(value: Option<&FieldValue>) -> ParsedVital<BloodPressure> {
    let Some(text) = value.and_then(FieldValue::as_text) else {
        return ParsedVital::Invalid;
    };

    let trimmed = text.trim();
    if matches_sentinel(trimmed, PLACEHOLDERS)
        || !trimmed.bytes().all(|b| b.is_ascii_digit() || b == b'/')
    {
        return ParsedVital::Invalid;
    }

    let Some((systolic, diastolic)) = trimmed.split_once('/') else {
        return ParsedVital::Invalid;
    };
    if diastolic.contains('/') {
        return ParsedVital::Invalid;
    }

    match (
        parse_side(systolic, MAX_SYSTOLIC),
        parse_side(diastolic, MAX_DIASTOLIC),
    ) {
        (Some(systolic), Some(diastolic)) => ParsedVital::Valid(BloodPressure {
            systolic,
            diastolic,
        }),
        _ => ParsedVital::Invalid,
    }
}

// Overflowing digit runs fail to parse, which is the same as out of range.
fn parse_side(side: &str, max: u32) -> Option<u32> {
    if side.is_empty() {
        return None;
    }
    side.parse::<u32>().ok().filter(|v| *v <= max)
}

pub fn systolic_stage(systolic: u32) -> u8 {
    match systolic {
        s if s < SYSTOLIC_ELEVATED_MIN => 1,
        s if s <= SYSTOLIC_ELEVATED_MAX => 2,
        s if s <= SYSTOLIC_STAGE_1_MAX => 3,
        _ => 4,
    }
}

/// Diastolic readings have no elevated band: normal jumps straight to stage 1.
pub fn diastolic_stage(diastolic: u32) -> u8 {
    match diastolic {
        d if d < DIASTOLIC_STAGE_1_MIN => 1,
        d if d <= DIASTOLIC_STAGE_1_MAX => 3,
        _ => 4,
    }
}

/// The reading scores as the worse of its two stages.
pub fn blood_pressure_points(bp: BloodPressure) -> u8 {
    systolic_stage(bp.systolic).max(diastolic_stage(bp.diastolic))
}

pub struct BloodPressureVital;

impl VitalSign for BloodPressureVital {
    fn id(&self) -> &str {
        "blood_pressure"
    }

    fn name(&self) -> &str {
        "Blood Pressure"
    }

    fn bands(&self) -> &[ScoreBand] {
        static BANDS: LazyLock<Vec<ScoreBand>> = LazyLock::new(|| {
            vec![
                ScoreBand::new(
                    "Normal",
                    format!("systolic < {SYSTOLIC_ELEVATED_MIN} and diastolic < {DIASTOLIC_STAGE_1_MIN}"),
                    1,
                ),
                ScoreBand::new(
                    "Elevated",
                    format!(
                        "systolic {SYSTOLIC_ELEVATED_MIN}-{SYSTOLIC_ELEVATED_MAX} and diastolic < {DIASTOLIC_STAGE_1_MIN}"
                    ),
                    2,
                ),
                ScoreBand::new(
                    "Stage 1",
                    format!(
                        "systolic {}-{SYSTOLIC_STAGE_1_MAX} or diastolic {DIASTOLIC_STAGE_1_MIN}-{DIASTOLIC_STAGE_1_MAX}",
                        SYSTOLIC_ELEVATED_MAX + 1
                    ),
                    3,
                ),
                ScoreBand::new(
                    "Stage 2",
                    format!(
                        "systolic >= {} or diastolic >= {}",
                        SYSTOLIC_STAGE_1_MAX + 1,
                        DIASTOLIC_STAGE_1_MAX + 1
                    ),
                    4,
                ),
            ]
        });
        &BANDS
    }

    fn assess(&self, record: &RawPatientRecord) -> SubScore {
        match parse_blood_pressure(record.blood_pressure.as_ref()) {
            ParsedVital::Valid(bp) => SubScore::valid(blood_pressure_points(bp)),
            ParsedVital::Invalid => SubScore::invalid(),
        }
    }
}
