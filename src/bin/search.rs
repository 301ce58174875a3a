use clap::Parser;

use searchgate::client::{SearchClient, render};
use searchgate::config::CONFIG;

/// Queries a running search gateway and prints the results.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Search terms
    query: String,

    /// Number of results to request
    #[arg(default_value_t = 5)]
    limit: usize,

    /// Gateway URL, overrides GATEWAY_URL.
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = &*CONFIG;
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
    config.log_warnings();

    let client = match args.endpoint {
        Some(endpoint) => SearchClient::new(endpoint, config.gateway_api_key.clone()),
        None => SearchClient::from_config(config),
    };

    let response = client.search(&args.query, args.limit).await?;
    print!("{}", render(&response));
    Ok(())
}
