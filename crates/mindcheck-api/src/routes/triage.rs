use axum::extract::State;
use axum::Json;
use serde::Serialize;

use mindcheck_core::models::answers::ScreeningAnswers;
use mindcheck_core::models::conditions::DetectedConditions;
use mindcheck_core::models::triage::TriageResult;
use mindcheck_triage::{detect_conditions, evaluate_triage};

use crate::config::EmergencyResources;
use crate::error::ApiError;
use crate::routes::screenings::validate;
use crate::state::AppState;

#[derive(Serialize)]
pub struct TriageResponse {
    #[serde(flatten)]
    triage: TriageResult,
    detected_conditions: DetectedConditions,
    #[serde(skip_serializing_if = "Option::is_none")]
    emergency_resources: Option<EmergencyResources>,
}

/// Evaluate a bare answers object. A non-object payload or an answer that
/// does not fit its question is a 400; the evaluator never sees it.
pub async fn evaluate(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<TriageResponse>, ApiError> {
    let answers = ScreeningAnswers::from_value(&body)?;
    validate(&answers)?;

    let triage = evaluate_triage(&answers);
    let detected_conditions = detect_conditions(&answers);

    if triage.requires_follow_up() {
        tracing::warn!(
            risk_level = %triage.risk_level,
            emergency = triage.should_show_emergency,
            "referral_required"
        );
    }

    let emergency_resources = triage
        .should_show_emergency
        .then(|| state.config.crisis_line.clone());

    Ok(Json(TriageResponse {
        triage,
        detected_conditions,
        emergency_resources,
    }))
}
