use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use frontdesk::config::AppConfig;
use frontdesk::handlers;
use frontdesk::services::classifier::clu::CluClassifier;
use frontdesk::services::knowledge::qna::QnaKnowledgeBase;
use frontdesk::services::scheduler::http::HttpScheduler;
use frontdesk::services::state_store::InMemoryConversationStore;
use frontdesk::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    config.validate()?;

    let timeout = Duration::from_secs(config.http_timeout_secs);

    let classifier = CluClassifier::new(
        config.clu_endpoint.clone(),
        config.clu_key.clone(),
        config.clu_project.clone(),
        config.clu_deployment.clone(),
        timeout,
    )?;
    let knowledge = QnaKnowledgeBase::new(
        config.qa_endpoint.clone(),
        config.qa_key.clone(),
        config.qa_project.clone(),
        config.qa_deployment.clone(),
        timeout,
    )?;
    let scheduler = HttpScheduler::new(config.scheduler_api_url.clone(), timeout)?;

    tracing::info!(scheduler = %config.scheduler_api_url, "collaborators configured");

    let state = Arc::new(AppState {
        classifier: Box::new(classifier),
        knowledge: Box::new(knowledge),
        scheduler: Box::new(scheduler),
        conversations: Box::new(InMemoryConversationStore::new()),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/messages", post(handlers::messages::receive_message))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
