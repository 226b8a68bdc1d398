//! Domain entities, validated newtypes, and ports.
//!
//! Purpose: keep the core model free of framework concerns. HTTP mapping
//! lives in `inbound::http`; persistence adapters live in
//! `outbound::persistence` and implement the traits declared in [`ports`].

pub mod catalog;
pub mod error;
pub mod ports;
pub mod user;

pub use self::catalog::{Album, AlbumId, Artist, ArtistId, ArtistListing, ArtistWithAlbums};
pub use self::error::{Error, ErrorCode};
pub use self::user::{
    DisplayName, InvalidIdError, LoginCredentials, LoginValidationError, User, UserId,
};

/// Response header carrying the request correlation identifier.
pub const TRACE_ID_HEADER: &str = "Trace-Id";

/// Convenient API result alias.
pub type ApiResult<T> = Result<T, Error>;
