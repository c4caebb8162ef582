use mindcheck_core::models::answers::SCALE_MAX;

use crate::questionnaire::Question;
use crate::Questionnaire;

/// Question ids of the social-function items, in presentation order.
pub const SOCIAL_FUNCTION_ITEMS: [&str; 8] = [
    "sf_work_or_study",
    "sf_household",
    "sf_social_interaction",
    "sf_relationships",
    "sf_self_care",
    "sf_leisure",
    "sf_community",
    "sf_concentration",
];

/// Social functioning. Eight items rated 0 (no difficulty) to 4 (extreme
/// difficulty). Total 0–32, higher = more impairment.
pub struct SocialFunction;

impl Questionnaire for SocialFunction {
    fn id(&self) -> &str {
        "social_function"
    }

    fn name(&self) -> &str {
        "Social Functioning"
    }

    fn version(&self) -> &str {
        "v1"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let texts = [
                "Keeping up with work or study",
                "Managing household responsibilities",
                "Talking with or meeting new people",
                "Maintaining close relationships",
                "Looking after your own health and hygiene",
                "Enjoying hobbies and leisure time",
                "Taking part in community activities",
                "Concentrating on tasks for ten minutes or more",
            ];

            SOCIAL_FUNCTION_ITEMS
                .iter()
                .zip(texts)
                .map(|(id, text)| Question::scale(id, text, 0, SCALE_MAX))
                .collect()
        });
        &QUESTIONS
    }
}
