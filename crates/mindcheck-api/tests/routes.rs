use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use mindcheck_api::config::AppConfig;
use mindcheck_api::state::AppState;

fn app() -> Router {
    mindcheck_api::router(AppState::new(AppConfig::default()))
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = send(app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn lists_and_describes_questionnaires() {
    let (status, body) = send(app(), "GET", "/questionnaires", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send(app(), "GET", "/questionnaires/social_function", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], "v1");
    assert_eq!(body["questions"].as_array().unwrap().len(), 8);
    assert_eq!(body["questions"][0]["kind"], json!({"type": "scale", "min": 0, "max": 4}));

    let (status, _) = send(app(), "GET", "/questionnaires/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn triage_returns_emergency_resources_for_imminent_risk() {
    let (status, body) = send(
        app(),
        "POST",
        "/triage",
        Some(json!({"suicidal_ideation": true, "other_q": false})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk_level"], "imminent");
    assert_eq!(body["has_suicidal_ideation"], true);
    assert_eq!(body["should_show_emergency"], true);
    assert_eq!(body["should_block_chat"], true);
    assert_eq!(body["emergency_resources"]["phone"], "988");
}

#[tokio::test]
async fn triage_of_empty_answers_is_low() {
    let (status, body) = send(app(), "POST", "/triage", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk_level"], "low");
    assert_eq!(body["detected_conditions"], json!([]));
    assert_eq!(body["should_show_emergency"], false);
    assert!(body.get("emergency_resources").is_none());
}

#[tokio::test]
async fn triage_rejects_non_object_answers() {
    let (status, body) = send(app(), "POST", "/triage", Some(json!([true, false]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("JSON object"));
}

#[tokio::test]
async fn screening_record_combines_all_signals() {
    let answers = json!({
        "low_mood": true,
        "anhedonia": true,
        "sf_work_or_study": 4,
        "sf_household": 4,
        "sf_social_interaction": 4,
        "sf_relationships": 4,
        "sf_self_care": 4,
        "sf_leisure": 4,
        "sf_community": 3,
        "sf_concentration": 3,
    });

    let (status, body) = send(app(), "POST", "/screenings", Some(json!({"answers": answers}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questionnaire_version"], "v1");
    assert_eq!(body["triage"]["risk_level"], "moderate");
    assert_eq!(body["social_function_score"], 30);
    assert_eq!(body["functional_level"], "severe");
    assert_eq!(body["overall_risk"], "high");
    assert_eq!(body["detected_conditions"], json!(["depression", "social_anxiety"]));
    assert!(body["id"].as_str().is_some());
}

#[tokio::test]
async fn screening_rejects_answers_that_do_not_fit() {
    let (status, body) = send(
        app(),
        "POST",
        "/screenings",
        Some(json!({"answers": {"suicidal_ideation": "sometimes", "sf_leisure": 9}})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("suicidal_ideation"));
    assert!(message.contains("sf_leisure"));
}

#[tokio::test]
async fn insights_context_is_refused_when_chat_is_blocked() {
    let (status, _) = send(
        app(),
        "POST",
        "/insights/context",
        Some(json!({"answers": {"self_harm": true}})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn insights_context_summarises_the_screening() {
    let (status, body) = send(
        app(),
        "POST",
        "/insights/context",
        Some(json!({"answers": {"excessive_worry": true, "sf_household": 2}})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let context = body["context"].as_str().unwrap();
    assert!(context.contains("## Initial Screening"));
    assert!(context.contains("hard to stop or control worrying?: Yes"));
    assert!(context.contains("- Managing household responsibilities: 2 / 4"));
    assert!(context.contains("- Overall risk: low"));
    assert!(context.contains("- Detected conditions: anxiety"));
}

#[test]
fn config_falls_back_to_defaults() {
    let config = AppConfig::from_lookup(|key| match key {
        "MINDCHECK_CRISIS_LINE_PHONE" => Some("116 123".to_string()),
        "MINDCHECK_QUESTIONNAIRE_VERSION" => Some("  ".to_string()),
        _ => None,
    });

    assert_eq!(config.questionnaire_version, "v1");
    assert_eq!(config.crisis_line.phone, "116 123");
    assert_eq!(config.crisis_line.name, "988 Suicide & Crisis Lifeline");
}

#[tokio::test]
async fn triage_rejects_answers_that_do_not_fit() {
    let (status, body) = send(
        app(),
        "POST",
        "/triage",
        Some(json!({"suicidal_ideation": "yes", "suicide_plan": "true"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("suicidal_ideation"));
    assert!(message.contains("suicide_plan"));

    let (status, _) = send(app(), "POST", "/triage", Some(json!({"suicidal_ideation": 99}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[test]
fn config_version_must_be_registered() {
    assert!(AppConfig::default().validate().is_ok());

    let config = AppConfig::from_lookup(|key| {
        (key == "MINDCHECK_QUESTIONNAIRE_VERSION").then(|| "v9".to_string())
    });
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("v9"));
}
