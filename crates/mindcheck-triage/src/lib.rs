//! mindcheck-triage
//!
//! Screening questionnaires and the triage evaluator. Pure functions —
//! no I/O. Classifies risk, detects conditions for follow-up routing, and
//! bands the social-functioning sub-score.

pub mod conditions;
pub mod error;
pub mod functional;
pub mod questionnaire;
pub mod questionnaires;
pub mod rules;
pub mod summary;

use error::TriageError;
use mindcheck_core::models::answers::{AnswerValue, ScreeningAnswers};
use questionnaire::{Question, ValidationError};

pub use conditions::detect_conditions;
pub use functional::{calculate_functional_level, get_overall_risk_level, social_function_score};
pub use rules::{evaluate_triage, evaluate_triage_value};
pub use summary::summarize_screening;

/// Trait implemented by each screening questionnaire.
pub trait Questionnaire: Send + Sync {
    /// Unique identifier (e.g., "initial_screening").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Version tag of the question set.
    fn version(&self) -> &str;

    fn questions(&self) -> &[Question];

    fn question(&self, id: &str) -> Option<&Question> {
        self.questions().iter().find(|q| q.id == id)
    }

    /// Check the answers that belong to this questionnaire. Keys owned by
    /// other questionnaires and unanswered questions are not errors.
    fn validate_answers(&self, answers: &ScreeningAnswers) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for (question_id, value) in answers.iter() {
            if let Some(question) = self.question(question_id)
                && let Err(problem) = question.kind.check(value)
            {
                errors.push(ValidationError {
                    questionnaire_id: self.id().to_string(),
                    question_id: question_id.to_string(),
                    message: format!("{}: {question_id}: {problem}", self.name()),
                });
            }
        }
        errors
    }

    /// Format the answered questions as structured text for the insights
    /// prompt.
    fn to_structured_input(&self, answers: &ScreeningAnswers) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for question in self.questions() {
            let rendered = match answers.get(&question.id) {
                Some(AnswerValue::Bool(true)) => "Yes".to_string(),
                Some(AnswerValue::Bool(false)) => "No".to_string(),
                Some(value @ AnswerValue::Scale(_)) => match question.kind {
                    questionnaire::AnswerKind::Scale { max, .. } => {
                        format!("{} / {max}", value.score())
                    }
                    questionnaire::AnswerKind::YesNo => continue,
                },
                _ => continue,
            };
            output.push_str(&format!("- {}: {rendered}\n", question.text));
        }
        output
    }
}

/// Return all registered questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![
        Box::new(questionnaires::initial_screening::InitialScreening),
        Box::new(questionnaires::social_function::SocialFunction),
    ]
}

/// Look up a questionnaire by ID.
pub fn get_questionnaire(id: &str) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}

/// Confirm every registered questionnaire is at `version`, so answers
/// stamped with it match the question set the evaluator reads.
pub fn check_questionnaire_version(version: &str) -> Result<(), TriageError> {
    let questionnaires = all_questionnaires();
    match questionnaires.iter().find(|q| q.version() != version) {
        Some(q) => Err(TriageError::UnknownVersion {
            version: version.to_string(),
            questionnaire_id: q.id().to_string(),
            registered: q.version().to_string(),
        }),
        None => Ok(()),
    }
}
