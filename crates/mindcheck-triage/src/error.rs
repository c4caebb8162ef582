use mindcheck_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("social-function score {score} is outside range [0, {max}]")]
    ScoreOutOfRange { score: u32, max: u8 },

    #[error("unknown questionnaire: {0}")]
    UnknownQuestionnaire(String),

    #[error(
        "questionnaire version {version} is not registered \
         ({questionnaire_id} is at {registered})"
    )]
    UnknownVersion {
        version: String,
        questionnaire_id: String,
        registered: String,
    },
}

impl From<CoreError> for TriageError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidInput(msg) => TriageError::InvalidInput(msg),
        }
    }
}
