//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use showbook_server::db::{create_pool, run_migrations};

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides .env files)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = super::database_url(args.database_url)?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;
    run_migrations(&pool)
        .await
        .context("Failed to apply migrations")?;
    pool.close().await;

    Ok(())
}
