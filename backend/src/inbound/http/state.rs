//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ArtistCatalogueQuery, FixtureArtistCatalogue, FixtureLoginService, InMemoryUserRepository,
    LoginService, UserRepository,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Credential validation service.
    pub login: Arc<dyn LoginService>,
    /// User lookup for `/users/me`.
    pub users: Arc<dyn UserRepository>,
    /// Artist catalogue read model.
    pub catalogue: Arc<dyn ArtistCatalogueQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        login: Arc<dyn LoginService>,
        users: Arc<dyn UserRepository>,
        catalogue: Arc<dyn ArtistCatalogueQuery>,
    ) -> Self {
        Self {
            login,
            users,
            catalogue,
        }
    }

    /// State backed entirely by fixtures: the fixture login contract, an
    /// in-memory user store pre-seeded with the fixture user, and the sample
    /// catalogue. Used by tests and by deployments without a database.
    pub fn fixtures() -> Self {
        Self::new(
            Arc::new(FixtureLoginService),
            Arc::new(InMemoryUserRepository::with_fixture_user()),
            Arc::new(FixtureArtistCatalogue::sample()),
        )
    }
}
