//! Record-level entry points.

use triage_core::models::patient::RawPatientRecord;
use triage_core::models::risk::RiskScore;

use crate::VitalSign;
use crate::vitals::age::AgeVital;
use crate::vitals::blood_pressure::BloodPressureVital;
use crate::vitals::temperature::{self, TemperatureVital};

/// Score one record. Total over every input: malformed fields contribute
/// zero points and set the data-quality flag instead of failing.
pub fn score(record: &RawPatientRecord) -> RiskScore {
    RiskScore::from_sub_scores(
        AgeVital.assess(record),
        BloodPressureVital.assess(record),
        TemperatureVital.assess(record),
    )
}

/// Whether the record's temperature is valid and at or above the fever
/// threshold. Independent of the total score.
pub fn has_fever(record: &RawPatientRecord) -> bool {
    temperature::is_fever(temperature::parse_temperature(
        record.temperature.as_ref(),
    ))
}
