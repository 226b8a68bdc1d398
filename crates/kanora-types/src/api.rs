//! Client-facing response envelope.

use serde::{Deserialize, Serialize};

/// Outcome envelope returned by every typed client call.
///
/// Mirrors the `{ success, data?, error? }` contract the pages consume:
/// `success` with `data` for a loaded entity, `success` without `data` for a
/// lookup that found nothing, and `!success` with `error` for a failure the
/// API reported. Transport-level failures are not represented here; they
/// surface as client errors instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the API call completed successfully.
    pub success: bool,
    /// Payload for successful calls that found an entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable failure message reported by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying a payload.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Successful response that found no entity.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }

    /// Failure reported by the API with a message for the user.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn ok_carries_data() {
        let response = ApiResponse::ok(7);
        assert!(response.success);
        assert_eq!(response.data, Some(7));
        assert!(response.error.is_none());
    }

    #[rstest]
    fn empty_is_successful_without_data() {
        let response: ApiResponse<()> = ApiResponse::empty();
        assert!(response.success);
        assert!(response.data.is_none());
        assert!(response.error.is_none());
    }

    #[rstest]
    fn failure_reports_the_message() {
        let response: ApiResponse<()> = ApiResponse::failure("boom");
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("boom"));
    }
}
