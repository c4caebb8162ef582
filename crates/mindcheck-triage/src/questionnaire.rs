use mindcheck_core::models::answers::AnswerValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The shape of answer a question accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerKind {
    /// Boolean yes/no.
    YesNo,
    /// Likert-style integer rating, inclusive on both ends.
    Scale { min: i64, max: i64 },
}

impl AnswerKind {
    /// Check a submitted value against this kind, returning a short
    /// description of the problem.
    pub fn check(&self, value: &AnswerValue) -> Result<(), String> {
        match (self, value) {
            (AnswerKind::YesNo, AnswerValue::Bool(_)) => Ok(()),
            (AnswerKind::YesNo, _) => Err("expected a yes/no answer".to_string()),
            (AnswerKind::Scale { min, max }, AnswerValue::Scale(n)) if n < min || n > max => {
                Err(format!("{n} is outside range [{min}, {max}]"))
            }
            (AnswerKind::Scale { .. }, AnswerValue::Scale(_)) => Ok(()),
            (AnswerKind::Scale { min, max }, _) => {
                Err(format!("expected an integer between {min} and {max}"))
            }
        }
    }
}

/// A single question within a questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub kind: AnswerKind,
}

impl Question {
    pub fn yes_no(id: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            kind: AnswerKind::YesNo,
        }
    }

    pub fn scale(id: &str, text: &str, min: i64, max: i64) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            kind: AnswerKind::Scale { min, max },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub questionnaire_id: String,
    pub question_id: String,
    pub message: String,
}
