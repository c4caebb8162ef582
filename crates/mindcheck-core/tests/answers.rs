use mindcheck_core::error::CoreError;
use mindcheck_core::models::answers::{AnswerValue, ScreeningAnswers};
use mindcheck_core::models::conditions::{Condition, DetectedConditions};
use mindcheck_core::models::risk::{FunctionalLevel, RiskLevel};
use serde_json::json;

#[test]
fn non_object_payload_is_rejected() {
    for value in [json!(null), json!([true]), json!("yes"), json!(3), json!(true)] {
        let err = ScreeningAnswers::from_value(&value).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)), "{value}");
    }
}

#[test]
fn object_payload_keeps_every_key() {
    let answers = ScreeningAnswers::from_value(&json!({
        "suicidal_ideation": false,
        "sf_household": 3,
        "notes": "free text",
    }))
    .unwrap();

    assert_eq!(answers.len(), 3);
    assert_eq!(answers.get("suicidal_ideation"), Some(&AnswerValue::Bool(false)));
    assert_eq!(answers.get("sf_household"), Some(&AnswerValue::Scale(3)));
    assert!(matches!(
        answers.get("notes"),
        Some(AnswerValue::Unrecognized(_))
    ));
}

#[test]
fn missing_and_malformed_answers_read_as_negative() {
    let answers = ScreeningAnswers::from_value(&json!({
        "low_mood": "yes",
        "sf_leisure": 9,
        "sf_self_care": -1,
        "anhedonia": null,
    }))
    .unwrap();

    assert!(!answers.is_affirmative("absent"));
    assert!(!answers.is_affirmative("low_mood"));
    assert!(!answers.is_affirmative("anhedonia"));
    assert_eq!(answers.score("absent"), 0);
    assert_eq!(answers.score("sf_leisure"), 0);
    assert_eq!(answers.score("sf_self_care"), 0);
}

#[test]
fn scale_answers_above_zero_are_affirmative() {
    assert!(AnswerValue::Scale(1).is_affirmative());
    assert!(!AnswerValue::Scale(0).is_affirmative());
    assert!(AnswerValue::Bool(true).is_affirmative());
    assert_eq!(AnswerValue::Scale(4).score(), 4);
    assert_eq!(AnswerValue::Bool(true).score(), 0);
}

#[test]
fn typed_deserialize_rejects_arrays() {
    assert!(serde_json::from_value::<ScreeningAnswers>(json!([1, 2])).is_err());
    let answers: ScreeningAnswers = serde_json::from_value(json!({"panic_attacks": true})).unwrap();
    assert!(answers.is_affirmative("panic_attacks"));
}

#[test]
fn risk_levels_order_by_severity() {
    assert!(RiskLevel::Low < RiskLevel::Moderate);
    assert!(RiskLevel::Moderate < RiskLevel::High);
    assert!(RiskLevel::High < RiskLevel::Imminent);
    assert_eq!(RiskLevel::default(), RiskLevel::Low);
    assert_eq!(serde_json::to_value(RiskLevel::Imminent).unwrap(), json!("imminent"));
    assert_eq!(
        serde_json::to_value(FunctionalLevel::Severe).unwrap(),
        json!("severe")
    );
}

#[test]
fn detected_conditions_behave_as_a_set() {
    let conditions: DetectedConditions = [
        Condition::Anxiety,
        Condition::Depression,
        Condition::Anxiety,
    ]
    .into_iter()
    .collect();

    assert_eq!(conditions.len(), 2);
    assert!(conditions.contains(Condition::Depression));
    assert_eq!(
        serde_json::to_value(&conditions).unwrap(),
        json!(["anxiety", "depression"])
    );
}

#[test]
fn out_of_range_scale_values_read_as_least_severe() {
    for n in [5, 99, -1, i64::MAX] {
        let value = AnswerValue::Scale(n);
        assert!(!value.is_affirmative(), "{n}");
        assert_eq!(value.score(), 0, "{n}");
    }
    for n in 1..=4 {
        assert!(AnswerValue::Scale(n).is_affirmative());
    }
}

#[test]
fn raw_and_typed_conversion_agree() {
    let raw = json!({
        "a": true,
        "b": 3,
        "c": 2.5,
        "d": u64::MAX,
        "e": "no",
        "f": [1],
    });

    let from_raw = ScreeningAnswers::from_value(&raw).unwrap();
    let typed: ScreeningAnswers = serde_json::from_value(raw).unwrap();
    assert_eq!(from_raw, typed);
    assert_eq!(from_raw.get("c"), Some(&AnswerValue::Unrecognized(json!(2.5))));
    assert!(matches!(from_raw.get("d"), Some(AnswerValue::Unrecognized(_))));
}
