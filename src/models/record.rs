//! Persisted assessment results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bucketed risk level shown next to the percentage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RiskLevel {
    Low,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::High => "High",
        }
    }

    /// Level for a final percentage: High at 50 and above.
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage >= 50 {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }

    /// User-facing guidance text for the result screen.
    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::Low => {
                "Your current status looks good. Keep up regular checkups to stay healthy."
            }
            RiskLevel::High => {
                "We recommend consulting a medical professional. Early detection and treatment matter."
            }
        }
    }
}

/// One entry in the assessment history. Append-only; never mutated
/// after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub timestamp: DateTime<Utc>,
    pub percentage: u8,
    pub level: RiskLevel,
}

impl ResultRecord {
    pub fn new(timestamp: DateTime<Utc>, percentage: u8) -> Self {
        Self {
            timestamp,
            percentage,
            level: RiskLevel::from_percentage(percentage),
        }
    }
}
