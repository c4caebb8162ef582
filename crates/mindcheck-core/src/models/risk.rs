use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Urgency tier assigned to a screening. Variants are declared in
/// ascending severity so the derived `Ord` is the severity order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    #[default]
    Low,
    Moderate,
    High,
    Imminent,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::Imminent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Imminent => "imminent",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Social-functioning tier, from best (`High`) to worst (`Severe`).
///
/// Declared best-to-worst, so `Ord` runs in the direction of increasing
/// impairment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FunctionalLevel {
    High,
    Moderate,
    Low,
    Severe,
}

impl FunctionalLevel {
    pub const ALL: [FunctionalLevel; 4] = [
        FunctionalLevel::High,
        FunctionalLevel::Moderate,
        FunctionalLevel::Low,
        FunctionalLevel::Severe,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FunctionalLevel::High => "high",
            FunctionalLevel::Moderate => "moderate",
            FunctionalLevel::Low => "low",
            FunctionalLevel::Severe => "severe",
        }
    }
}

impl fmt::Display for FunctionalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
