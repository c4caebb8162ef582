//! Triage rule table and evaluator.
//!
//! Every rule is checked independently against the answers. The final
//! risk is the most severe contribution among the rules that fired.

use mindcheck_core::models::answers::ScreeningAnswers;
use mindcheck_core::models::risk::RiskLevel;
use mindcheck_core::models::triage::{TriageAction, TriageResult};

use crate::error::TriageError;

const NO_RISK_REASON: &str = "No risk indicators reported";

const CRISIS: &[TriageAction] = &[
    TriageAction::ShowEmergencyBanner,
    TriageAction::BlockChat,
    TriageAction::CreateReferral,
];
const URGENT: &[TriageAction] = &[TriageAction::BlockChat, TriageAction::CreateReferral];
const PROFESSIONAL: &[TriageAction] = &[TriageAction::RecommendProfessional];
const ASSESSMENT: &[TriageAction] = &[TriageAction::RecommendAssessment];
const SELF_HELP: &[TriageAction] = &[TriageAction::OfferSelfHelp];

/// Predicate an answer must satisfy for a rule to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Yes, or any scale value above zero.
    Affirmative,
    /// Scale value at or above the threshold.
    AtLeast(u8),
}

impl Trigger {
    pub fn matches(self, answers: &ScreeningAnswers, question_id: &str) -> bool {
        match self {
            Trigger::Affirmative => answers.is_affirmative(question_id),
            Trigger::AtLeast(threshold) => answers.score(question_id) >= threshold,
        }
    }
}

/// Dedicated result flag a rule sets when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskFlag {
    /// Sets `has_suicidal_ideation`; risk is at least imminent.
    SuicidalIdeation,
    /// Sets `has_psychosis_indicators`; risk is at least high.
    Psychosis,
}

impl RiskFlag {
    fn floor(self) -> RiskLevel {
        match self {
            RiskFlag::SuicidalIdeation => RiskLevel::Imminent,
            RiskFlag::Psychosis => RiskLevel::High,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TriageRule {
    pub id: &'static str,
    pub question_id: &'static str,
    pub trigger: Trigger,
    pub risk: RiskLevel,
    pub actions: &'static [TriageAction],
    pub flag: Option<RiskFlag>,
    pub reason: &'static str,
}

impl TriageRule {
    const fn yes(
        question_id: &'static str,
        risk: RiskLevel,
        actions: &'static [TriageAction],
        reason: &'static str,
    ) -> Self {
        Self {
            id: question_id,
            question_id,
            trigger: Trigger::Affirmative,
            risk,
            actions,
            flag: None,
            reason,
        }
    }

    const fn flagged(mut self, flag: RiskFlag) -> Self {
        self.flag = Some(flag);
        self
    }

    /// Risk this rule contributes when it fires, including its flag floor.
    pub fn contribution(&self) -> RiskLevel {
        match self.flag {
            Some(flag) => self.risk.max(flag.floor()),
            None => self.risk,
        }
    }
}

/// Ordered rule table for the initial screening questionnaire.
pub static RULES: &[TriageRule] = &[
    TriageRule::yes(
        "suicidal_ideation",
        RiskLevel::Imminent,
        CRISIS,
        "Reported thoughts of ending their life",
    )
    .flagged(RiskFlag::SuicidalIdeation),
    TriageRule::yes(
        "suicide_plan",
        RiskLevel::Imminent,
        CRISIS,
        "Reported a plan or steps toward ending their life",
    )
    .flagged(RiskFlag::SuicidalIdeation),
    TriageRule::yes(
        "harm_to_others",
        RiskLevel::Imminent,
        CRISIS,
        "Reported thoughts of seriously harming someone else",
    ),
    TriageRule::yes(
        "self_harm",
        RiskLevel::High,
        URGENT,
        "Reported recent deliberate self-harm",
    ),
    TriageRule::yes(
        "hallucinations",
        RiskLevel::High,
        URGENT,
        "Reported perceptual disturbances",
    )
    .flagged(RiskFlag::Psychosis),
    TriageRule::yes(
        "paranoia",
        RiskLevel::High,
        URGENT,
        "Reported persecutory or thought-control beliefs",
    )
    .flagged(RiskFlag::Psychosis),
    TriageRule::yes(
        "substance_loss_of_control",
        RiskLevel::Moderate,
        PROFESSIONAL,
        "Reported loss of control over substance use",
    ),
    TriageRule::yes(
        "low_mood",
        RiskLevel::Moderate,
        ASSESSMENT,
        "Reported persistent low mood",
    ),
    TriageRule::yes(
        "anhedonia",
        RiskLevel::Moderate,
        ASSESSMENT,
        "Reported loss of interest or pleasure",
    ),
    TriageRule::yes(
        "panic_attacks",
        RiskLevel::Moderate,
        ASSESSMENT,
        "Reported panic attacks",
    ),
    TriageRule::yes(
        "trauma_flashbacks",
        RiskLevel::Moderate,
        ASSESSMENT,
        "Reported trauma flashbacks or nightmares",
    ),
    TriageRule::yes(
        "elevated_mood",
        RiskLevel::Moderate,
        PROFESSIONAL,
        "Reported periods of elevated mood",
    ),
    TriageRule::yes(
        "restrictive_eating",
        RiskLevel::Moderate,
        PROFESSIONAL,
        "Reported restrictive eating or weight preoccupation",
    ),
    TriageRule::yes(
        "excessive_worry",
        RiskLevel::Low,
        ASSESSMENT,
        "Reported difficulty controlling worry",
    ),
    TriageRule::yes(
        "trauma_avoidance",
        RiskLevel::Low,
        ASSESSMENT,
        "Reported avoidance of trauma reminders",
    ),
    TriageRule::yes(
        "intrusive_compulsions",
        RiskLevel::Low,
        ASSESSMENT,
        "Reported compulsive thoughts or actions",
    ),
    TriageRule::yes(
        "sleep_disturbance",
        RiskLevel::Low,
        SELF_HELP,
        "Reported ongoing sleep difficulty",
    ),
];

/// Classify risk from one set of screening answers.
///
/// Missing questions read as "no", unknown keys are ignored, and values of
/// the wrong type read as the least severe answer.
pub fn evaluate_triage(answers: &ScreeningAnswers) -> TriageResult {
    let mut risk_level = RiskLevel::Low;
    let mut reason: Option<&'static str> = None;
    let mut triggered_rules = Vec::new();
    let mut recommended_actions = Vec::new();
    let mut has_suicidal_ideation = false;
    let mut has_psychosis_indicators = false;

    for rule in RULES {
        if !rule.trigger.matches(answers, rule.question_id) {
            continue;
        }

        triggered_rules.push(rule.id.to_string());
        for &action in rule.actions {
            push_unique(&mut recommended_actions, action);
        }
        match rule.flag {
            Some(RiskFlag::SuicidalIdeation) => has_suicidal_ideation = true,
            Some(RiskFlag::Psychosis) => has_psychosis_indicators = true,
            None => {}
        }

        let contribution = rule.contribution();
        if reason.is_none() || contribution > risk_level {
            risk_level = contribution;
            reason = Some(rule.reason);
        }
    }

    let should_show_emergency = risk_level == RiskLevel::Imminent;
    let should_block_chat = risk_level >= RiskLevel::High;
    if should_show_emergency {
        push_unique(&mut recommended_actions, TriageAction::ShowEmergencyBanner);
    }
    if should_block_chat {
        push_unique(&mut recommended_actions, TriageAction::BlockChat);
    }

    tracing::debug!(
        risk_level = %risk_level,
        triggered = triggered_rules.len(),
        "triage evaluated"
    );

    TriageResult {
        risk_level,
        triggered_rules,
        recommended_actions,
        has_suicidal_ideation,
        has_psychosis_indicators,
        should_show_emergency,
        should_block_chat,
        highest_risk_reason: reason.unwrap_or(NO_RISK_REASON).to_string(),
    }
}

/// Same as [`evaluate_triage`] for raw JSON. Fails with
/// [`TriageError::InvalidInput`] when the payload is not an object.
pub fn evaluate_triage_value(value: &serde_json::Value) -> Result<TriageResult, TriageError> {
    let answers = ScreeningAnswers::from_value(value)?;
    Ok(evaluate_triage(&answers))
}

fn push_unique(actions: &mut Vec<TriageAction>, action: TriageAction) {
    if !actions.contains(&action) {
        actions.push(action);
    }
}
