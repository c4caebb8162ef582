use axum::Json;
use serde::Serialize;

use mindcheck_triage::{all_questionnaires, summarize_screening};

use crate::error::ApiError;
use crate::routes::screenings::{validate, ScreeningSubmission};

#[derive(Serialize)]
pub struct InsightsContext {
    context: String,
}

/// Build the prompt context handed to the AI chat/insights layer.
///
/// Refused whenever triage blocks chat; those users are routed to crisis
/// resources instead.
pub async fn build_context(
    Json(submission): Json<ScreeningSubmission>,
) -> Result<Json<InsightsContext>, ApiError> {
    validate(&submission.answers)?;

    let summary = summarize_screening(&submission.answers)?;
    if summary.triage.should_block_chat {
        return Err(ApiError::Forbidden(
            "chat is unavailable for this screening; please contact a crisis line".to_string(),
        ));
    }

    let mut context = String::new();
    for questionnaire in all_questionnaires() {
        context.push_str(&questionnaire.to_structured_input(&submission.answers));
        context.push('\n');
    }

    let conditions: Vec<&str> = summary.detected_conditions.iter().map(|c| c.as_str()).collect();
    context.push_str("## Screening Outcome\n\n");
    context.push_str(&format!("- Overall risk: {}\n", summary.overall_risk));
    context.push_str(&format!("- Functional level: {}\n", summary.functional_level));
    if conditions.is_empty() {
        context.push_str("- Detected conditions: none\n");
    } else {
        context.push_str(&format!("- Detected conditions: {}\n", conditions.join(", ")));
    }

    Ok(Json(InsightsContext { context }))
}
