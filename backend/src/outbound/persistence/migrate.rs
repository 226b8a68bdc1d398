//! Database bootstrap: directory preparation and migration application.
//!
//! Backs the `migrate` binary and the integration test harness. Migrations
//! are discovered on disk at run time so a deployment can ship them next to
//! the binary; the harness applies pending ones in version order.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use diesel::Connection;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{FileBasedMigrations, MigrationHarness};
use tracing::info;

/// Errors raised while bootstrapping the database.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The data directory could not be created.
    #[error("failed to create data directory {path}: {source}")]
    DataDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The database file could not be opened or created.
    #[error("failed to open database at {path}: {source}")]
    Connection {
        /// Database file path.
        path: PathBuf,
        /// Underlying Diesel connection error.
        #[source]
        source: diesel::ConnectionError,
    },
    /// Migration discovery or application failed.
    #[error("migration failure in {path}: {message}")]
    Harness {
        /// Migrations directory.
        path: PathBuf,
        /// Harness failure description.
        message: String,
    },
}

/// Result of a bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The migrations directory was absent; nothing was applied.
    SkippedNoMigrationsDir,
    /// Pending migrations were applied, newest state reached. The vector
    /// holds the applied versions in application order and is empty when
    /// the database was already up to date.
    Applied(Vec<String>),
}

/// Apply all pending file-based migrations to the given SQLite database.
///
/// Returns the applied migration versions in application order.
///
/// # Errors
///
/// Fails when the database cannot be opened or a migration cannot be
/// applied; an aborted migration leaves the database on its previous
/// version.
pub fn apply_migrations(
    database_path: &Path,
    migrations_dir: &Path,
) -> Result<Vec<String>, MigrationError> {
    let mut connection = SqliteConnection::establish(&database_path.to_string_lossy())
        .map_err(|source| MigrationError::Connection {
            path: database_path.to_path_buf(),
            source,
        })?;

    let migrations =
        FileBasedMigrations::from_path(migrations_dir).map_err(|err| MigrationError::Harness {
            path: migrations_dir.to_path_buf(),
            message: err.to_string(),
        })?;

    let applied = connection
        .run_pending_migrations(migrations)
        .map_err(|err| MigrationError::Harness {
            path: migrations_dir.to_path_buf(),
            message: err.to_string(),
        })?;

    Ok(applied.iter().map(ToString::to_string).collect())
}

/// Prepare the data directory and bring the database to the latest schema.
///
/// Ensures the database file's parent directory exists, then applies pending
/// migrations. When the migrations directory is absent the run is a no-op
/// that still reports readiness, so a stripped deployment boots cleanly.
///
/// # Errors
///
/// Fails when the data directory cannot be created or migrations fail; see
/// [`apply_migrations`].
pub fn bootstrap_database(
    database_path: &Path,
    migrations_dir: &Path,
) -> Result<BootstrapOutcome, MigrationError> {
    if let Some(parent) = database_path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        Dir::create_ambient_dir_all(parent, ambient_authority()).map_err(|source| {
            MigrationError::DataDir {
                path: parent.to_path_buf(),
                source,
            }
        })?;
    }

    if !migrations_dir.is_dir() {
        info!(
            migrations_dir = %migrations_dir.display(),
            "no migrations directory found; skipping migration application"
        );
        return Ok(BootstrapOutcome::SkippedNoMigrationsDir);
    }

    let applied = apply_migrations(database_path, migrations_dir)?;
    for version in &applied {
        info!(version = %version, "applied migration");
    }
    info!(
        count = applied.len(),
        database = %database_path.display(),
        "database ready"
    );
    Ok(BootstrapOutcome::Applied(applied))
}
