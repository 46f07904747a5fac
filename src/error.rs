use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Liveness failure body. Orchestrators only look at the status code.
pub const DEAD_BODY: &str = "App is dead";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("liveness probe failed: crash endpoint was triggered")]
    LivenessFailed,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::LivenessFailed => {
                tracing::warn!(error = %self, "Reporting liveness failure");
                (StatusCode::INTERNAL_SERVER_ERROR, DEAD_BODY).into_response()
            }
        }
    }
}
