//! Subcommand implementations

pub mod migrate;
pub mod serve;

use anyhow::{Context, Result};

/// Resolve the database URL from the flag or environment.
pub(crate) fn database_url(arg: Option<String>) -> Result<String> {
    arg.or_else(|| std::env::var("DATABASE_URL").ok())
        .filter(|url| !url.trim().is_empty())
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.showbook/.env")
}
