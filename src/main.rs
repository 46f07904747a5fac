//! Probe Server: liveness/readiness playground for container orchestrators.
//!
//! This is the application entry point. It initializes tracing, loads the
//! optional TOML configuration, builds the router around fresh state, and
//! serves until SIGINT/SIGTERM.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use probe_server::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use probe_server::{create_router, http::start_server, AppState};

/// Probe Server: an HTTP service whose liveness probe can be made to fail
#[derive(Parser, Debug)]
#[command(name = "probe-server", version, about)]
struct Args {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, overrides http.host
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides http.port
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "probe_server=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(log_filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(log_filter));

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration before tracing so the log format is known
    let config = AppConfig::load_or_default(args.config.as_ref())?.with_overrides(args.host, args.port)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, config.logging.format);

    match &args.config {
        Some(path) => tracing::info!(path = %path.display(), "Loaded configuration"),
        None => tracing::info!("No configuration file given, using defaults"),
    }

    let state = AppState::new();
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}
