use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::risk::RiskLevel;

/// Follow-up the caller should take for a screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TriageAction {
    ShowEmergencyBanner,
    BlockChat,
    CreateReferral,
    RecommendProfessional,
    RecommendAssessment,
    OfferSelfHelp,
}

impl TriageAction {
    pub fn as_str(self) -> &'static str {
        match self {
            TriageAction::ShowEmergencyBanner => "show_emergency_banner",
            TriageAction::BlockChat => "block_chat",
            TriageAction::CreateReferral => "create_referral",
            TriageAction::RecommendProfessional => "recommend_professional",
            TriageAction::RecommendAssessment => "recommend_assessment",
            TriageAction::OfferSelfHelp => "offer_self_help",
        }
    }
}

impl fmt::Display for TriageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one set of screening answers.
///
/// Produced once by the evaluator; downstream layers read it but never
/// change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriageResult {
    pub risk_level: RiskLevel,
    /// Ids of the rules that fired, in rule-table order.
    pub triggered_rules: Vec<String>,
    /// Deduplicated, in the order rules first requested them.
    pub recommended_actions: Vec<TriageAction>,
    pub has_suicidal_ideation: bool,
    pub has_psychosis_indicators: bool,
    pub should_show_emergency: bool,
    pub should_block_chat: bool,
    pub highest_risk_reason: String,
}

impl TriageResult {
    pub fn has_action(&self, action: TriageAction) -> bool {
        self.recommended_actions.contains(&action)
    }

    pub fn requires_referral(&self) -> bool {
        self.has_action(TriageAction::CreateReferral)
    }

    /// Downstream notification or referral workflows must run for this
    /// result.
    pub fn requires_follow_up(&self) -> bool {
        self.should_show_emergency || self.requires_referral()
    }
}
