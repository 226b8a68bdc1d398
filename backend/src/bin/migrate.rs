//! One-shot database migration bootstrap.
//!
//! Ensures the data directory exists, opens (creating if missing) the SQLite
//! database, and applies pending migrations in version order. When the
//! migrations directory is absent the run is skipped and the process still
//! exits successfully so stripped deployments boot cleanly. Any failure
//! aborts the process with a non-zero status.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use kanora_backend::outbound::persistence::{BootstrapOutcome, bootstrap_database};

/// Bring the library database to the latest schema.
#[derive(Debug, Parser)]
#[command(name = "migrate", about = "Apply pending Kanora database migrations")]
struct Args {
    /// Path to the SQLite database file, created if missing.
    #[arg(long, default_value = "data/kanora.db")]
    database_path: PathBuf,

    /// Directory containing the Diesel migrations.
    #[arg(long, default_value = "backend/migrations")]
    migrations_dir: PathBuf,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    let args = Args::parse();
    let outcome = bootstrap_database(&args.database_path, &args.migrations_dir)?;
    match outcome {
        BootstrapOutcome::SkippedNoMigrationsDir => {
            info!("migration bootstrap complete (nothing to apply)");
        }
        BootstrapOutcome::Applied(versions) => {
            info!(applied = versions.len(), "migration bootstrap complete");
        }
    }
    Ok(())
}
