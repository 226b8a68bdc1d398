//! Builders for HTTP state backed by repositories or fixtures.

use std::sync::Arc;

use kanora_backend::inbound::http::state::HttpState;
use kanora_backend::outbound::persistence::{
    DieselArtistCatalogue, DieselLoginService, DieselUserRepository,
};

use super::ServerConfig;

/// Build the HTTP state, using Diesel adapters when a pool is configured and
/// fixture implementations otherwise.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    match config.db_pool() {
        Some(pool) => HttpState::new(
            Arc::new(DieselLoginService::new(DieselUserRepository::new(
                pool.clone(),
            ))),
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselArtistCatalogue::new(pool.clone())),
        ),
        None => HttpState::fixtures(),
    }
}
