//! s3front — static file server with an S3 bucket proxy.
//!
//! Serves files from a local directory and forwards requests under
//! `/api/s3proxy` to an S3 bucket over HTTPS. Three flags, no config
//! file, no state.

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use s3front::config::Config;

/// Command-line arguments for the s3front server.
#[derive(Parser, Debug)]
#[command(
    name = "s3front",
    version,
    about = "Static file server with an S3 bucket proxy"
)]
struct Cli {
    /// Address to host the HTTP server on.
    #[arg(long, default_value = "0.0.0.0:8476")]
    addr: String,

    /// The directory for serving static files.
    #[arg(long, default_value = "./build")]
    dir: std::path::PathBuf,

    /// The Amazon AWS S3 bucket to proxy API requests to.
    #[arg(long, default_value = "gnosis-dev-dfusion")]
    bucket: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing / logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config {
        addr: cli.addr,
        static_root: cli.dir,
        bucket: cli.bucket,
        ..Config::default()
    };

    let client = s3front::config::http_client(&config)?;
    let state = Arc::new(s3front::AppState {
        config: config.clone(),
        client,
    });

    let app = s3front::server::app(state);

    // A bind failure is fatal: the error propagates out of main and the
    // process exits non-zero.
    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!("starting server on {}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("s3front shut down");

    Ok(())
}

/// Wait for SIGTERM or SIGINT (Ctrl+C), then return to trigger graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        },
    }
}
