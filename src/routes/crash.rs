//! Debug endpoint that simulates a wedged process.

use axum::extract::State;

use crate::state::AppState;

pub const CRASH_BODY: &str = "App will now fail liveness probe!";

/// Flip the liveness flag. Idempotent.
pub async fn crash(State(state): State<AppState>) -> &'static str {
    if state.liveness.mark_dead() {
        tracing::warn!("Crash requested, liveness probe will fail from now on");
    } else {
        tracing::debug!("Crash requested again, already dead");
    }
    CRASH_BODY
}
