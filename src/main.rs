use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

use searchgate::api::{AppState, create_router};
use searchgate::config::CONFIG;

/// Search gateway: scrapes the provider's html results and serves them as JSON.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Address to listen on, overrides BIND_ADDR.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = &*CONFIG;

    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .with_target(true)
        .init();
    config.log_warnings();

    let state = Arc::new(AppState::from_config(config)?);
    log::info!("proxying searches to {}", state.upstream.endpoint());
    let app = create_router(state);

    let addr = args.bind.unwrap_or_else(|| config.bind_addr.clone());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    log::info!("listening on {addr}");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
