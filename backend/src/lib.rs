//! Kanora backend library modules.
//!
//! The crate follows a hexagonal layout: `domain` holds entities, validated
//! newtypes and ports; `inbound` exposes the HTTP adapter; `outbound` holds
//! the Diesel persistence adapters for the SQLite library database.

pub mod doc;
pub mod domain;
#[cfg(feature = "example-data")]
pub mod example_data;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(feature = "test-support")]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Tracing middleware attaching a request-scoped trace identifier.
pub use middleware::trace::Trace;
