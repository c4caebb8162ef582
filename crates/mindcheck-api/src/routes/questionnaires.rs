use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use mindcheck_triage::error::TriageError;
use mindcheck_triage::questionnaire::Question;
use mindcheck_triage::{all_questionnaires, get_questionnaire};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct QuestionnaireSummary {
    id: String,
    name: String,
    version: String,
}

#[derive(Serialize)]
pub struct QuestionnaireDetail {
    id: String,
    name: String,
    version: String,
    questions: Vec<Question>,
}

pub async fn list_questionnaires() -> Json<Vec<QuestionnaireSummary>> {
    let questionnaires: Vec<QuestionnaireSummary> = all_questionnaires()
        .iter()
        .map(|q| QuestionnaireSummary {
            id: q.id().to_string(),
            name: q.name().to_string(),
            version: q.version().to_string(),
        })
        .collect();
    Json(questionnaires)
}

pub async fn get_questionnaire_detail(
    Path(id): Path<String>,
) -> Result<Json<QuestionnaireDetail>, ApiError> {
    let questionnaire =
        get_questionnaire(&id).ok_or_else(|| TriageError::UnknownQuestionnaire(id.clone()))?;

    Ok(Json(QuestionnaireDetail {
        id: questionnaire.id().to_string(),
        name: questionnaire.name().to_string(),
        version: questionnaire.version().to_string(),
        questions: questionnaire.questions().to_vec(),
    }))
}
