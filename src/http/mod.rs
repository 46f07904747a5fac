//! HTTP server module.
//!
//! Serves the router over plain HTTP. TLS is left to the ingress in front of
//! the pod. The server drains in-flight requests on SIGTERM/SIGINT before
//! exiting.

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
pub use shutdown::setup_shutdown_handler;
