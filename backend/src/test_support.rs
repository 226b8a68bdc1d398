//! Test utilities for the backend crate.
//!
//! Shared helpers for integration tests in `tests/`. Compiled only when the
//! `test-support` feature is enabled; the dev-dependency on this crate turns
//! the feature on for test builds.

use std::path::{Path, PathBuf};

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

use crate::outbound::persistence::{DbPool, PoolConfig, apply_migrations};

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Path to this crate's migrations directory.
pub fn migrations_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations")
}

/// A migrated SQLite database in a temporary directory.
///
/// The returned guard keeps the directory alive; dropping it removes the
/// database file.
pub struct TempDatabase {
    _dir: tempfile::TempDir,
    /// Path to the database file.
    pub path: PathBuf,
}

impl TempDatabase {
    /// Create a fresh database and bring it to the latest schema.
    ///
    /// # Panics
    ///
    /// Panics when the temporary directory cannot be created or migrations
    /// fail; tests cannot proceed meaningfully in either case.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temporary directory");
        let path = dir.path().join("kanora-test.db");
        apply_migrations(&path, &migrations_dir()).expect("apply migrations");
        Self { _dir: dir, path }
    }

    /// Connection pool over the temporary database.
    ///
    /// # Panics
    ///
    /// Panics when the pool cannot be built.
    pub fn pool(&self) -> DbPool {
        DbPool::new(PoolConfig::new(self.path.to_string_lossy()).with_max_size(2))
            .expect("build pool over temporary database")
    }
}

impl Default for TempDatabase {
    fn default() -> Self {
        Self::new()
    }
}
