//! Authentication request types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login request body for `POST /api/v1/login`.
///
/// Example JSON:
/// `{"username":"admin","password":"password"}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account username.
    #[schema(example = "admin")]
    pub username: String,
    /// Account password.
    #[schema(example = "password")]
    pub password: String,
}
