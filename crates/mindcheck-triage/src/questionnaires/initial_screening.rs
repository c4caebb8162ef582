use crate::questionnaire::Question;
use crate::Questionnaire;

/// Initial risk screen. Yes/no questions covering crisis indicators and
/// the symptom clusters used for condition routing.
pub struct InitialScreening;

impl Questionnaire for InitialScreening {
    fn id(&self) -> &str {
        "initial_screening"
    }

    fn name(&self) -> &str {
        "Initial Screening"
    }

    fn version(&self) -> &str {
        "v1"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            [
                (
                    "suicidal_ideation",
                    "In the past two weeks, have you had thoughts of ending your life?",
                ),
                (
                    "suicide_plan",
                    "Have you made a plan or taken steps toward ending your life?",
                ),
                (
                    "harm_to_others",
                    "Have you had thoughts of seriously harming someone else?",
                ),
                ("self_harm", "Have you recently hurt yourself on purpose?"),
                (
                    "hallucinations",
                    "Have you heard or seen things that other people could not?",
                ),
                (
                    "paranoia",
                    "Have you felt that others were plotting against you or controlling your thoughts?",
                ),
                (
                    "substance_loss_of_control",
                    "Has your alcohol or drug use felt out of your control?",
                ),
                (
                    "low_mood",
                    "Have you felt down, depressed, or hopeless on most days?",
                ),
                (
                    "anhedonia",
                    "Have you lost interest or pleasure in things you used to enjoy?",
                ),
                (
                    "excessive_worry",
                    "Have you found it hard to stop or control worrying?",
                ),
                (
                    "panic_attacks",
                    "Have you had sudden episodes of intense fear with a racing heart or shortness of breath?",
                ),
                (
                    "trauma_flashbacks",
                    "Do you relive a distressing event through nightmares or flashbacks?",
                ),
                (
                    "trauma_avoidance",
                    "Do you go out of your way to avoid reminders of a distressing event?",
                ),
                (
                    "elevated_mood",
                    "Have you had periods of unusually high energy with little need for sleep?",
                ),
                (
                    "intrusive_compulsions",
                    "Do you feel driven to repeat actions or thoughts to relieve anxiety?",
                ),
                (
                    "restrictive_eating",
                    "Have you been restricting food or worrying a lot about your weight or shape?",
                ),
                (
                    "sleep_disturbance",
                    "Have you had trouble falling or staying asleep most nights?",
                ),
            ]
            .into_iter()
            .map(|(id, text)| Question::yes_no(id, text))
            .collect()
        });
        &QUESTIONS
    }
}
