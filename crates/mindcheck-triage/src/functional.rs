//! Social-functioning bands and the combined overall risk.

use mindcheck_core::models::answers::ScreeningAnswers;
use mindcheck_core::models::risk::{FunctionalLevel, RiskLevel};

use crate::error::TriageError;
use crate::questionnaires::social_function::SOCIAL_FUNCTION_ITEMS;

/// Highest possible social-function total (8 items × 4).
pub const SOCIAL_FUNCTION_MAX: u8 = 32;

/// Inclusive score range mapped to one functional level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionalBand {
    pub min: u8,
    pub max: u8,
    pub level: FunctionalLevel,
}

/// Contiguous bands covering `0..=SOCIAL_FUNCTION_MAX`, lowest scores first.
pub const FUNCTIONAL_BANDS: [FunctionalBand; 4] = [
    FunctionalBand {
        min: 0,
        max: 8,
        level: FunctionalLevel::High,
    },
    FunctionalBand {
        min: 9,
        max: 16,
        level: FunctionalLevel::Moderate,
    },
    FunctionalBand {
        min: 17,
        max: 24,
        level: FunctionalLevel::Low,
    },
    FunctionalBand {
        min: 25,
        max: SOCIAL_FUNCTION_MAX,
        level: FunctionalLevel::Severe,
    },
];

/// Sum of the social-function items. Unanswered or malformed items add 0.
pub fn social_function_score(answers: &ScreeningAnswers) -> u8 {
    SOCIAL_FUNCTION_ITEMS
        .iter()
        .map(|id| answers.score(id))
        .sum()
}

/// Band a social-function impairment total.
pub fn calculate_functional_level(total_score: u32) -> Result<FunctionalLevel, TriageError> {
    FUNCTIONAL_BANDS
        .iter()
        .find(|band| (u32::from(band.min)..=u32::from(band.max)).contains(&total_score))
        .map(|band| band.level)
        .ok_or(TriageError::ScoreOutOfRange {
            score: total_score,
            max: SOCIAL_FUNCTION_MAX,
        })
}

/// Where a functional level sits on the risk scale.
pub fn functional_risk(level: FunctionalLevel) -> RiskLevel {
    match level {
        FunctionalLevel::High | FunctionalLevel::Moderate => RiskLevel::Low,
        FunctionalLevel::Low => RiskLevel::Moderate,
        FunctionalLevel::Severe => RiskLevel::High,
    }
}

/// The more severe of the initial screening risk and the functional level.
pub fn get_overall_risk_level(
    initial_risk: RiskLevel,
    functional_level: FunctionalLevel,
) -> RiskLevel {
    initial_risk.max(functional_risk(functional_level))
}
