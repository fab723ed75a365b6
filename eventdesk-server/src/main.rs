use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use eventdesk_server::Collection;

#[derive(Parser)]
#[command(name = "eventdesk-server")]
#[command(about = "Serve an in-memory event collection at /events")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// JSON file with an array of records to start with
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let collection = match &args.seed {
        Some(path) => load_seed(path)?,
        None => Collection::default(),
    };

    let app = eventdesk_server::router(collection);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!("eventdesk-server listening on http://{}/events", args.bind);

    axum::serve(listener, app).await?;

    Ok(())
}

fn load_seed(path: &Path) -> Result<Collection> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let records: Vec<serde_json::Value> =
        serde_json::from_str(&content).context("Seed file must contain a JSON array")?;

    let collection = Collection::from_records(records)?;
    info!(path = %path.display(), "seeded collection");
    Ok(collection)
}
