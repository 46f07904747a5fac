//! Probe Server - a tiny HTTP service for exercising container orchestration
//! liveness and readiness probes.
//!
//! The server answers a greeting on `/`, liveness on `/healthz`, readiness on
//! `/ready`, and exposes `/crash` to make the liveness probe fail for the rest
//! of the process lifetime.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
