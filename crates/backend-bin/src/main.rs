use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use staffdir_backend_lib::{
    config::Settings, directory::InMemoryDirectory, router, AppState,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Employee directory server protected by HTTP Basic Authentication.
#[derive(Parser, Debug)]
#[command(name = "staffdir", version, about)]
struct Cli {
    /// Path to a TOML config file (replaces the default search chain)
    #[arg(long)]
    config: Option<String>,

    /// Bind address override
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize configuration
    let mut config = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let bind_addr = config.bind_addr;
    let seed_count = config.users.len();

    // Create application state; this registers the bootstrap credentials and
    // scrubs their plaintexts. A duplicate seed username aborts startup.
    let state = Arc::new(AppState::new(InMemoryDirectory::sample(), config)?);
    tracing::info!(%bind_addr, seed_count, "starting staffdir server");

    let app = router::create_router(state);

    let listener = TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
