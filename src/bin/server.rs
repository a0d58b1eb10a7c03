//! Counter API server binary.
//!
//! This is the main entry point for the counter REST API server. It builds
//! the repository, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with local (in-memory) repository (default)
//! cargo run --bin counter-server
//!
//! # Run with PostgreSQL repository
//! POSTGRES_DB=counters POSTGRES_USER=app POSTGRES_PASSWORD=secret \
//!   SEED_HOST=db.internal SEED_PORT=5432 \
//!   cargo run --bin counter-server --features "postgres-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8888)
//! - `DATABASE_URL` or `POSTGRES_DB`/`POSTGRES_USER`/`POSTGRES_PASSWORD`/
//!   `SEED_HOST`/`SEED_PORT`: Postgres connection (postgres-repo feature)
//! - `REPOSITORY_TYPE`: `postgres` or `local` (inferred when unset)
//! - `RUST_LOG`: Log level (default: info)
//!
//! A `repository.toml` file in the working directory takes precedence over
//! the repository environment variables.
//!
//! If the database is unreachable, startup retries a bounded number of times
//! and then exits without ever binding the HTTP port.

use std::env;
use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use counter_api::db::{services, RepositoryFactory};
use counter_api::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting counter API server");

    // Build the repository from repository.toml when present, otherwise from
    // the environment; a failed setup (including exhausted connection
    // retries) is fatal.
    let repository = if Path::new("repository.toml").exists() {
        info!("Using repository.toml configuration");
        RepositoryFactory::from_default_config().await
    } else {
        RepositoryFactory::from_env().await
    }
    .context("initializing repository")?;
    info!("Repository initialized successfully");

    match services::health_check(repository.as_ref()).await {
        Ok(_) => info!("Storage health check passed"),
        Err(e) => warn!("Storage health check failed: {}", e),
    }

    let state = AppState::new(repository);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8888);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
