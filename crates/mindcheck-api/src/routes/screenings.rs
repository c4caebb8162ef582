use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use mindcheck_core::models::answers::ScreeningAnswers;
use mindcheck_core::models::screening::ScreeningRecord;
use mindcheck_triage::{all_questionnaires, summarize_screening};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ScreeningSubmission {
    pub answers: ScreeningAnswers,
}

/// Reject answers that do not fit their questions, listing every problem.
pub(crate) fn validate(answers: &ScreeningAnswers) -> Result<(), ApiError> {
    let problems: Vec<String> = all_questionnaires()
        .iter()
        .flat_map(|q| q.validate_answers(answers))
        .map(|e| e.to_string())
        .collect();

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ApiError::BadRequest(problems.join("; ")))
    }
}

/// Evaluate a full submission and return the record for the caller to
/// persist.
pub async fn create_screening(
    State(state): State<AppState>,
    Json(submission): Json<ScreeningSubmission>,
) -> Result<Json<ScreeningRecord>, ApiError> {
    validate(&submission.answers)?;

    let summary = summarize_screening(&submission.answers)?;
    let record = ScreeningRecord::new(state.config.questionnaire_version.clone(), summary);

    if record.summary.triage.requires_follow_up() {
        tracing::warn!(
            screening_id = %record.id,
            risk_level = %record.summary.triage.risk_level,
            emergency = record.summary.triage.should_show_emergency,
            "referral_required"
        );
    }
    tracing::info!(
        screening_id = %record.id,
        overall_risk = %record.summary.overall_risk,
        functional_level = %record.summary.functional_level,
        "screening evaluated"
    );

    Ok(Json(record))
}
