//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the OpenAPI specification for the REST API. It
//! registers:
//!
//! - **Paths**: the HTTP endpoints from the inbound layer (users, artists,
//!   health)
//! - **Schemas**: domain wrappers ([`ErrorSchema`], [`ErrorCodeSchema`]) plus
//!   the shared wire DTOs from `kanora-types`
//! - **Security**: the session cookie authentication scheme
//!
//! The generated specification is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use kanora_types::{AlbumSummary, ArtistDetails, ArtistSummary, LoginRequest};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::UserResponse;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Kanora API",
        description = "HTTP interface for the Kanora media library: session-authenticated catalogue access and health probes.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::current_user,
        crate::inbound::http::artists::list_artists,
        crate::inbound::http::artists::get_artist_details,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        LoginRequest,
        UserResponse,
        ArtistSummary,
        AlbumSummary,
        ArtistDetails,
    )),
    tags(
        (name = "users", description = "Authentication and account access"),
        (name = "artists", description = "Catalogue browse and detail reads"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
