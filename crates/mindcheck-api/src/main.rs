use tracing_subscriber::EnvFilter;

use mindcheck_api::config::AppConfig;
use mindcheck_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = AppConfig::from_env();
    config.validate()?;
    tracing::info!(
        questionnaire_version = %config.questionnaire_version,
        "starting mindcheck-api"
    );

    let app = mindcheck_api::router(AppState::new(config));

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
