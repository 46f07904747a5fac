//! Root greeting.

/// Fixed greeting served on `/`.
pub const GREETING: &str = "Hello from the probe server on Kubernetes!";

/// Root handler. Independent of liveness state.
pub async fn index() -> &'static str {
    GREETING
}
