//! PayFlow API - Main entry point
//!
//! Demo backend for the PayFlow B2B2C payroll / earned-wage-access
//! platform preview: payroll CSV upload with preview, mock employee data,
//! LAN IP discovery for QR handoff, and mock AI assistant endpoints.

use anyhow::{Context, Result};
use clap::Parser;
use payflow_api::{build_router, AppState};
use payflow_common::config::resolve_config;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for payflow-api
///
/// Every flag is optional; unset values fall through to the TOML config
/// file and then to compiled defaults.
#[derive(Parser, Debug)]
#[command(name = "payflow-api")]
#[command(about = "PayFlow payroll platform demo backend")]
#[command(version)]
struct Args {
    /// Address to bind to
    #[arg(long, env = "PAYFLOW_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PAYFLOW_PORT")]
    port: Option<u16>,

    /// Port the demo frontend is served on (used in the QR handoff URL)
    #[arg(long, env = "PAYFLOW_FRONTEND_PORT")]
    frontend_port: Option<u16>,

    /// Maximum accepted upload size in bytes
    #[arg(long, env = "PAYFLOW_MAX_UPLOAD_BYTES")]
    max_upload_bytes: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "payflow_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PayFlow API v{}", env!("CARGO_PKG_VERSION"));

    // Parse command-line arguments and resolve full configuration
    let args = Args::parse();
    let config = resolve_config(args.host, args.port, args.frontend_port, args.max_upload_bytes);

    info!(
        "Upload limit: {} bytes, frontend port: {}",
        config.max_upload_bytes, config.frontend_port
    );

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("payflow-api listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
