//! showbook CLI - run the venue and artist booking server
//!
//! - `showbook serve` runs the HTTP server (applying migrations first)
//! - `showbook migrate` brings the database schema up to date and exits

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use commands::{migrate::MigrateArgs, serve::ServeArgs};

#[derive(Parser, Debug)]
#[command(
    name = "showbook",
    author,
    version,
    about = "Book artists into venues: list venues, artists and upcoming shows"
)]
struct Cli {
    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    /// Also append INFO and above to this file
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Apply pending database migrations and exit
    Migrate(MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let loaded = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        log_file: cli.log_file.clone(),
    })?;
    config::report_dotenv(&loaded);

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Migrate(args) => commands::migrate::run_migrate(args).await,
    }
}
