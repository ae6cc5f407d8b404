//! Filmoteca Web Server
//!
//! Serves the movie catalog as routed HTML pages over a dataset loaded
//! once at startup and shared read-only for the life of the process.
//!
//! Usage:
//!   filmoteca-server --port 8080

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use filmoteca_catalog::Catalog;
use filmoteca_server::build_router;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "filmoteca-server")]
#[command(about = "Movie catalog web server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!("Filmoteca starting...");
    let catalog = Arc::new(Catalog::seed());
    info!("Catalog loaded: {} movies", catalog.len());

    let app = build_router(catalog);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port))
        .await
        .with_context(|| format!("Failed to bind port {}", args.port))?;
    info!("Listening on port {}", args.port);
    axum::serve(listener, app).await.context("HTTP server failed")?;

    Ok(())
}
