//! Ports implemented by outbound adapters, plus fixture implementations.
//!
//! Handlers depend on these traits only, so they stay testable without I/O.
//! Fixture implementations back the server when no database pool is
//! configured and double as test stand-ins.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::catalog::{Album, AlbumId, Artist, ArtistId, ArtistListing, ArtistWithAlbums};
use super::error::Error;
use super::user::{DisplayName, LoginCredentials, User, UserId};

/// Errors surfaced by user persistence adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// The database could not be reached.
    #[error("user store connection error: {message}")]
    Connection {
        /// Underlying failure description.
        message: String,
    },
    /// A query failed.
    #[error("user store query error: {message}")]
    Query {
        /// Underlying failure description.
        message: String,
    },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

impl From<UserPersistenceError> for Error {
    fn from(err: UserPersistenceError) -> Self {
        match err {
            UserPersistenceError::Connection { message } => Error::service_unavailable(message),
            UserPersistenceError::Query { message } => Error::internal(message),
        }
    }
}

/// Errors surfaced by catalogue adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// The database could not be reached.
    #[error("catalogue connection error: {message}")]
    Connection {
        /// Underlying failure description.
        message: String,
    },
    /// A query failed.
    #[error("catalogue query error: {message}")]
    Query {
        /// Underlying failure description.
        message: String,
    },
}

impl CatalogueError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

impl From<CatalogueError> for Error {
    fn from(err: CatalogueError) -> Self {
        match err {
            CatalogueError::Connection { message } => Error::service_unavailable(message),
            CatalogueError::Query { message } => Error::internal(message),
        }
    }
}

/// Authenticate login credentials into a user identity.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user's id.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}

/// Durable storage for user records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user, or update its display name when it already exists.
    async fn upsert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Fetch a user by id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;
}

/// Read access to the artist catalogue.
#[async_trait]
pub trait ArtistCatalogueQuery: Send + Sync {
    /// All artists ordered by name, with album counts.
    async fn list_artists(&self) -> Result<Vec<ArtistListing>, CatalogueError>;

    /// One artist with its albums ordered newest first, or `None` when the
    /// artist does not exist.
    async fn artist_with_albums(
        &self,
        id: &ArtistId,
    ) -> Result<Option<ArtistWithAlbums>, CatalogueError>;
}

/// Write access used by seeding and library ingestion.
#[async_trait]
pub trait CatalogueIngestion: Send + Sync {
    /// Insert the artist, or update its mutable fields when it exists.
    async fn upsert_artist(&self, artist: &Artist) -> Result<(), CatalogueError>;

    /// Insert the album, or update its mutable fields when it exists.
    async fn upsert_album(&self, album: &Album) -> Result<(), CatalogueError>;
}

/// Fixture credentials accepted by [`FixtureLoginService`].
pub const FIXTURE_USERNAME: &str = "admin";
/// Fixture password accepted by [`FixtureLoginService`].
pub const FIXTURE_PASSWORD: &str = "password";
/// Identifier of the fixture user.
pub const FIXTURE_USER_ID: &str = "123e4567-e89b-12d3-a456-426614174000";
/// Display name of the fixture user.
pub const FIXTURE_DISPLAY_NAME: &str = "Kanora Admin";

/// In-memory login service honouring the fixture credential contract.
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        if credentials.username() == FIXTURE_USERNAME && credentials.password() == FIXTURE_PASSWORD
        {
            UserId::new(FIXTURE_USER_ID)
                .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))
        } else {
            Err(Error::unauthorized("invalid credentials"))
        }
    }
}

/// In-memory user repository.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    /// Repository pre-populated with the fixture user.
    ///
    /// # Panics
    ///
    /// Panics if the fixture constants are malformed, which compile-time
    /// constants make impossible in practice.
    pub fn with_fixture_user() -> Self {
        let repository = Self::default();
        let user = User::new(
            UserId::new(FIXTURE_USER_ID).expect("fixture user id is a valid UUID"),
            DisplayName::new(FIXTURE_DISPLAY_NAME).expect("fixture display name is valid"),
        );
        repository
            .users
            .lock()
            .expect("user map lock")
            .insert(user.id.to_string(), user);
        repository
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn upsert(&self, user: &User) -> Result<(), UserPersistenceError> {
        self.users
            .lock()
            .map_err(|_| UserPersistenceError::query("user map poisoned"))?
            .insert(user.id.to_string(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self
            .users
            .lock()
            .map_err(|_| UserPersistenceError::query("user map poisoned"))?
            .get(id.as_ref())
            .cloned())
    }
}

/// In-memory artist catalogue backed by a fixed set of entries.
#[derive(Default)]
pub struct FixtureArtistCatalogue {
    entries: Vec<ArtistWithAlbums>,
}

impl FixtureArtistCatalogue {
    /// Catalogue over the given entries.
    pub fn new(entries: Vec<ArtistWithAlbums>) -> Self {
        Self { entries }
    }

    /// Small sample library used by tests and fixture deployments.
    ///
    /// # Panics
    ///
    /// Panics if the embedded sample identifiers are malformed, which the
    /// literals make impossible in practice.
    pub fn sample() -> Self {
        let nordlys_id =
            ArtistId::new("11111111-1111-4111-8111-111111111111").expect("sample artist id");
        let veiled_id =
            ArtistId::new("22222222-2222-4222-8222-222222222222").expect("sample artist id");

        let nordlys = ArtistWithAlbums {
            artist: Artist {
                id: nordlys_id.clone(),
                name: "Nordlys".to_owned(),
                bio: Some("Electronic duo recording above the Arctic Circle.".to_owned()),
            },
            albums: vec![
                Album {
                    id: AlbumId::new("aaaaaaa1-aaaa-4aaa-8aaa-aaaaaaaaaaa1")
                        .expect("sample album id"),
                    artist_id: nordlys_id.clone(),
                    title: "Polar Night".to_owned(),
                    cover_art_url: Some(
                        "https://covers.kanora.example/polar-night.jpg".to_owned(),
                    ),
                    release_date: chrono::NaiveDate::from_ymd_opt(2021, 11, 5),
                },
                Album {
                    id: AlbumId::new("aaaaaaa2-aaaa-4aaa-8aaa-aaaaaaaaaaa2")
                        .expect("sample album id"),
                    artist_id: nordlys_id,
                    title: "Midnight Sun".to_owned(),
                    cover_art_url: None,
                    release_date: chrono::NaiveDate::from_ymd_opt(2019, 6, 21),
                },
            ],
        };

        let veiled = ArtistWithAlbums {
            artist: Artist {
                id: veiled_id,
                name: "Veiled Harbour".to_owned(),
                bio: None,
            },
            albums: Vec::new(),
        };

        Self::new(vec![nordlys, veiled])
    }
}

#[async_trait]
impl ArtistCatalogueQuery for FixtureArtistCatalogue {
    async fn list_artists(&self) -> Result<Vec<ArtistListing>, CatalogueError> {
        let mut listings: Vec<ArtistListing> = self
            .entries
            .iter()
            .map(|entry| ArtistListing {
                artist: entry.artist.clone(),
                album_count: u32::try_from(entry.albums.len()).unwrap_or(u32::MAX),
            })
            .collect();
        listings.sort_by(|a, b| a.artist.name.cmp(&b.artist.name));
        Ok(listings)
    }

    async fn artist_with_albums(
        &self,
        id: &ArtistId,
    ) -> Result<Option<ArtistWithAlbums>, CatalogueError> {
        Ok(self
            .entries
            .iter()
            .find(|entry| entry.artist.id == *id)
            .cloned())
    }
}
