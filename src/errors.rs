use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("classification unavailable: {0}")]
    ClassificationUnavailable(String),

    #[error("knowledge base unavailable: {0}")]
    KnowledgeUnavailable(String),

    #[error("scheduler unavailable: {0}")]
    SchedulerUnavailable(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::ClassificationUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::KnowledgeUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::SchedulerUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
