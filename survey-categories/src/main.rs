use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use survey_categories::{CategoryStore, router};

#[derive(Parser)]
#[command(name = "survey-categories")]
#[command(about = "File-backed categories service for the survey app", long_about = None)]
struct Cli {
    /// Path of the JSON file backing the category collection
    #[arg(long, default_value = "categories.json")]
    data_file: PathBuf,

    /// Port to listen on
    #[arg(long, default_value_t = 3001)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let store = CategoryStore::open(&cli.data_file);
    let app = router(Arc::new(Mutex::new(store)));

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(
        %addr,
        data_file = %cli.data_file.display(),
        "categories service listening"
    );
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
