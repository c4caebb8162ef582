use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::conditions::DetectedConditions;
use super::risk::{FunctionalLevel, RiskLevel};
use super::triage::TriageResult;

/// Everything computed from one screening submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningSummary {
    pub triage: TriageResult,
    pub detected_conditions: DetectedConditions,
    /// Social-function impairment total, 0–32.
    pub social_function_score: u8,
    pub functional_level: FunctionalLevel,
    pub overall_risk: RiskLevel,
}

/// Write-once record of a screening, shaped for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningRecord {
    pub id: Uuid,
    pub questionnaire_version: String,
    #[serde(flatten)]
    pub summary: ScreeningSummary,
    pub created_at: jiff::Timestamp,
}

impl ScreeningRecord {
    pub fn new(questionnaire_version: impl Into<String>, summary: ScreeningSummary) -> Self {
        Self {
            id: Uuid::new_v4(),
            questionnaire_version: questionnaire_version.into(),
            summary,
            created_at: jiff::Timestamp::now(),
        }
    }
}
