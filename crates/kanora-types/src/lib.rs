//! Shared wire types for the Kanora media library.
//!
//! These are the data-transfer types exchanged between the backend REST API,
//! the typed client, and the terminal frontend. They carry no behaviour
//! beyond construction helpers; ownership of the underlying records stays
//! with the backend, and consumers treat them as transient read-only copies.
//!
//! JSON uses camelCase field names throughout, matching the public API
//! contract documented in the backend's OpenAPI specification.

pub mod api;
pub mod auth;
pub mod catalog;
pub mod theme;

pub use api::ApiResponse;
pub use auth::LoginRequest;
pub use catalog::{AlbumSummary, ArtistDetails, ArtistSummary};
pub use theme::Theme;
