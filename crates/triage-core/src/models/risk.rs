use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Total score at or above which a patient is considered high risk.
pub const HIGH_RISK_THRESHOLD: u8 = 4;

/// Total score at or above which a patient is shown as moderate risk.
pub const MODERATE_RISK_THRESHOLD: u8 = 2;

/// Points awarded for a single vital sign.
///
/// An invalid field always carries zero points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubScore {
    points: u8,
    is_valid: bool,
}

impl SubScore {
    pub const fn valid(points: u8) -> Self {
        Self {
            points,
            is_valid: true,
        }
    }

    pub const fn invalid() -> Self {
        Self {
            points: 0,
            is_valid: false,
        }
    }

    pub fn points(&self) -> u8 {
        self.points
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }
}

/// Structured risk score for one patient record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskScore {
    pub age_score: u8,
    pub bp_score: u8,
    pub temp_score: u8,
    pub total_score: u8,
    pub has_data_quality_issue: bool,
}

impl RiskScore {
    /// Combine the three sub-scores. The total and the data-quality flag are
    /// always derived here, never set independently.
    pub fn from_sub_scores(age: SubScore, bp: SubScore, temp: SubScore) -> Self {
        Self {
            age_score: age.points(),
            bp_score: bp.points(),
            temp_score: temp.points(),
            total_score: age.points() + bp.points() + temp.points(),
            has_data_quality_issue: !(age.is_valid() && bp.is_valid() && temp.is_valid()),
        }
    }

    pub fn is_high_risk(&self) -> bool {
        self.total_score >= HIGH_RISK_THRESHOLD
    }

    pub fn tier(&self) -> RiskTier {
        RiskTier::from_total(self.total_score)
    }
}

/// Display tier for a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn from_total(total: u8) -> Self {
        if total >= HIGH_RISK_THRESHOLD {
            RiskTier::High
        } else if total >= MODERATE_RISK_THRESHOLD {
            RiskTier::Moderate
        } else {
            RiskTier::Low
        }
    }
}
