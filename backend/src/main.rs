//! Backend entry-point: wires REST endpoints, persistence, and OpenAPI docs.

mod server;

use std::env;

use actix_web::cookie::{Key, SameSite};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use kanora_backend::outbound::persistence::{DbPool, PoolConfig};
use server::ServerConfig;

const DEFAULT_DATABASE_PATH: &str = "data/kanora.db";
const BIND_PORT: u16 = 8080;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let key = load_session_key()?;

    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);

    let database_path =
        env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_owned());
    let db_pool = match DbPool::new(PoolConfig::new(&database_path)) {
        Ok(pool) => {
            info!(database = %database_path, "database pool ready");
            Some(pool)
        }
        Err(e) => {
            warn!(database = %database_path, error = %e, "running without a database; fixture data only");
            None
        }
    };

    #[cfg(feature = "example-data")]
    run_example_data_seeding(db_pool.as_ref()).await?;

    let bind_addr = std::net::SocketAddr::from(([0, 0, 0, 0], BIND_PORT));

    let mut config = ServerConfig::new(key, cookie_secure, SameSite::Lax, bind_addr);
    if let Some(pool) = db_pool {
        config = config.with_db_pool(pool);
    }

    server::run(config)?.await
}

/// Load the session signing key, falling back to an ephemeral key in
/// development builds.
fn load_session_key() -> std::io::Result<Key> {
    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    match std::fs::read(&key_path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )))
            }
        }
    }
}

/// Seed the deterministic sample library when enabled via the environment.
#[cfg(feature = "example-data")]
async fn run_example_data_seeding(db_pool: Option<&DbPool>) -> std::io::Result<()> {
    use kanora_backend::example_data::{ExampleDataSettings, seed_example_data};
    use kanora_backend::outbound::persistence::DieselCatalogueIngestion;

    let settings = ExampleDataSettings::from_env();
    if !settings.is_enabled {
        return Ok(());
    }
    let Some(pool) = db_pool else {
        warn!("example data seeding requested but no database is configured");
        return Ok(());
    };
    let ingestion = DieselCatalogueIngestion::new(pool.clone());
    seed_example_data(&settings, &ingestion)
        .await
        .map_err(|e| std::io::Error::other(format!("example data seeding failed: {e}")))?;
    Ok(())
}
