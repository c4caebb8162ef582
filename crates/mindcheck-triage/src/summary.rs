use mindcheck_core::models::answers::ScreeningAnswers;
use mindcheck_core::models::screening::ScreeningSummary;

use crate::error::TriageError;
use crate::{
    calculate_functional_level, detect_conditions, evaluate_triage, get_overall_risk_level,
    social_function_score,
};

/// Run every evaluator over one submission.
pub fn summarize_screening(answers: &ScreeningAnswers) -> Result<ScreeningSummary, TriageError> {
    let triage = evaluate_triage(answers);
    let detected_conditions = detect_conditions(answers);
    let social_function_score = social_function_score(answers);
    let functional_level = calculate_functional_level(social_function_score.into())?;
    let overall_risk = get_overall_risk_level(triage.risk_level, functional_level);

    Ok(ScreeningSummary {
        triage,
        detected_conditions,
        social_function_score,
        functional_level,
        overall_risk,
    })
}
