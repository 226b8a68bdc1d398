//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use kanora_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
    bind_addr: SocketAddr,
    db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration using application preferences.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// When provided, the server uses database-backed implementations for
    /// the domain ports; otherwise it falls back to fixtures.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Session signing key.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Whether session cookies carry the `Secure` flag.
    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure
    }

    /// SameSite policy applied to session cookies.
    pub fn same_site(&self) -> SameSite {
        self.same_site
    }

    /// Socket address the server will bind to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Configured database pool, if any.
    pub fn db_pool(&self) -> Option<&DbPool> {
        self.db_pool.as_ref()
    }
}
