use mindcheck_core::models::answers::ScreeningAnswers;
use mindcheck_core::models::conditions::{Condition, DetectedConditions};

use crate::rules::Trigger;

#[derive(Debug, Clone, Copy)]
pub struct ConditionRule {
    pub condition: Condition,
    pub question_id: &'static str,
    pub trigger: Trigger,
}

const fn yes(condition: Condition, question_id: &'static str) -> ConditionRule {
    ConditionRule {
        condition,
        question_id,
        trigger: Trigger::Affirmative,
    }
}

/// Condition tag → trigger question table. A tag may appear on several rows.
pub static CONDITION_RULES: &[ConditionRule] = &[
    yes(Condition::Depression, "low_mood"),
    yes(Condition::Depression, "anhedonia"),
    yes(Condition::Anxiety, "excessive_worry"),
    yes(Condition::Anxiety, "panic_attacks"),
    yes(Condition::Ptsd, "trauma_flashbacks"),
    yes(Condition::Ptsd, "trauma_avoidance"),
    yes(Condition::Bipolar, "elevated_mood"),
    yes(Condition::Ocd, "intrusive_compulsions"),
    yes(Condition::EatingDisorder, "restrictive_eating"),
    yes(Condition::Psychosis, "hallucinations"),
    yes(Condition::Psychosis, "paranoia"),
    yes(Condition::SubstanceUse, "substance_loss_of_control"),
    ConditionRule {
        condition: Condition::SocialAnxiety,
        question_id: "sf_social_interaction",
        trigger: Trigger::AtLeast(3),
    },
];

/// Tag the conditions worth a detailed follow-up assessment. Independent
/// of the risk level.
pub fn detect_conditions(answers: &ScreeningAnswers) -> DetectedConditions {
    CONDITION_RULES
        .iter()
        .filter(|rule| rule.trigger.matches(answers, rule.question_id))
        .map(|rule| rule.condition)
        .collect()
}
