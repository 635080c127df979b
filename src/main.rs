use anyhow::{Context, Result};
use coach_site::config::Config;
use coach_site::routing::{Resolver, RouteTable};
use coach_site::server::{router, AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coach_site=info".parse()?),
        )
        .init();

    info!("Starting coach site");

    // Load configuration from environment
    let config = Config::from_env()?;

    let table = match &config.routes_file {
        Some(path) => {
            info!("Loading route table from {}", path);
            RouteTable::load(path)?
        }
        None => RouteTable::builtin(),
    };
    let resolver = Resolver::new(table).context("Route table is not usable")?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {} (site URL {})", addr, config.site_url);

    axum::serve(listener, router(AppState::new(config, resolver)))
        .await
        .context("Server error")?;

    Ok(())
}
