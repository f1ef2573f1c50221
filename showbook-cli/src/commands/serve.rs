//! HTTP server command

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use showbook_server::db::{create_pool_with_options, run_migrations};
use showbook_server::http::server::DEFAULT_TIMEOUT_SECS;
use showbook_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Database URL (overrides .env files)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Skip applying migrations at startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = super::database_url(args.database_url)?;

    let pool = create_pool_with_options(&database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    if args.no_migrate {
        tracing::info!("Skipping migrations (--no-migrate)");
    } else {
        run_migrations(&pool)
            .await
            .context("Failed to apply migrations")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        request_timeout: Duration::from_secs(args.timeout),
    };

    tracing::info!("Starting showbook server on {}", config.bind_addr);

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
