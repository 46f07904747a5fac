//! Liveness and readiness probes for container orchestration.
//!
//! Liveness tells the orchestrator whether to restart the process and fails
//! once `/crash` has been hit. Readiness tells it whether to route traffic
//! here and has no dependencies to check, so it always succeeds.

use axum::extract::State;

use crate::error::AppError;
use crate::state::AppState;

pub const ALIVE_BODY: &str = "I'm alive!";
pub const READY_BODY: &str = "I'm ready!";

/// Liveness probe handler.
pub async fn liveness(State(state): State<AppState>) -> Result<&'static str, AppError> {
    if state.liveness.is_dead() {
        return Err(AppError::LivenessFailed);
    }
    Ok(ALIVE_BODY)
}

/// Readiness probe handler.
pub async fn readiness() -> &'static str {
    READY_BODY
}
