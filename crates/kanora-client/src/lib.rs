//! Typed HTTP client for the Kanora media-library API.
//!
//! Owns transport concerns only: request construction, the session cookie
//! jar, timeout handling, and mapping HTTP outcomes onto the
//! [`ApiResponse`] envelope pages consume. Three tiers of failure are kept
//! distinct:
//!
//! 1. the API reported a failure — `ApiResponse { success: false, error }`
//!    with the reported message;
//! 2. a lookup succeeded but found nothing — `ApiResponse { success: true }`
//!    with no data (only `get_artist_details` produces this, from a 404);
//! 3. the transport or decoding failed — [`ClientError`], the "thrown
//!    exception" tier callers collapse into a generic message.

use std::time::Duration;

use kanora_types::{ApiResponse, ArtistDetails, ArtistSummary, LoginRequest};
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

/// An error that can occur when talking to the API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or the response body not read/decoded.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The configured base URL is not a valid URL.
    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
    /// The server answered with a status the client cannot interpret and no
    /// readable error payload.
    #[error("unexpected response status: {0}")]
    UnexpectedStatus(StatusCode),
}

/// A result type for client calls.
pub type ClientResult<T> = Result<T, ClientError>;

/// Error payload shape returned by the API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorPayload {
    message: String,
}

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Kanora REST API.
///
/// Holds a cookie store so the session issued by [`ApiClient::login`]
/// authenticates subsequent calls.
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Build a client for the API at `base_url`.
    ///
    /// # Errors
    ///
    /// Fails when the base URL does not parse or the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { base_url, http })
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        self.base_url.join(path).map_err(ClientError::from)
    }

    /// Authenticate and store the session cookie for subsequent calls.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for transport failures; API-reported
    /// failures arrive as an unsuccessful envelope.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<ApiResponse<()>> {
        let url = self.endpoint("api/v1/login")?;
        let response = self
            .http
            .post(url)
            .json(&LoginRequest {
                username: username.to_owned(),
                password: password.to_owned(),
            })
            .send()
            .await?;
        if response.status().is_success() {
            return Ok(ApiResponse::ok(()));
        }
        failure_from_response(response).await
    }

    /// End the current session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for transport failures.
    pub async fn logout(&self) -> ClientResult<ApiResponse<()>> {
        let url = self.endpoint("api/v1/logout")?;
        let response = self.http.post(url).send().await?;
        if response.status().is_success() {
            return Ok(ApiResponse::ok(()));
        }
        failure_from_response(response).await
    }

    /// Fetch all artists for the browse page.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for transport failures; API-reported
    /// failures arrive as an unsuccessful envelope.
    pub async fn list_artists(&self) -> ClientResult<ApiResponse<Vec<ArtistSummary>>> {
        let url = self.endpoint("api/v1/artists")?;
        let response = self.http.get(url).send().await?;
        if response.status().is_success() {
            let data = response.json().await?;
            return Ok(ApiResponse::ok(data));
        }
        failure_from_response(response).await
    }

    /// Fetch one artist with its albums.
    ///
    /// A `404` maps to a successful envelope with no data — the page's
    /// "not found" state — rather than a failure.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for transport failures; API-reported
    /// failures arrive as an unsuccessful envelope.
    pub async fn get_artist_details(
        &self,
        artist_id: &str,
    ) -> ClientResult<ApiResponse<ArtistDetails>> {
        let url = self.endpoint(&format!("api/v1/artists/{artist_id}"))?;
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status.is_success() {
            let data = response.json().await?;
            return Ok(ApiResponse::ok(data));
        }
        if status == StatusCode::NOT_FOUND {
            return Ok(ApiResponse::empty());
        }
        failure_from_response(response).await
    }
}

/// Map a non-success response onto the envelope, preserving the reported
/// message when the error payload is readable.
async fn failure_from_response<T>(response: reqwest::Response) -> ClientResult<ApiResponse<T>> {
    let status = response.status();
    match response.json::<ApiErrorPayload>().await {
        Ok(payload) => Ok(ApiResponse::failure(payload.message)),
        Err(_) => Err(ClientError::UnexpectedStatus(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn json_response(status: u16, body: &str) -> reqwest::Response {
        let response = http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(body.to_owned())
            .expect("build response");
        reqwest::Response::from(response)
    }

    #[rstest]
    fn base_url_gains_a_trailing_slash() {
        let client = ApiClient::new("http://localhost:8080").expect("valid base URL");
        let endpoint = client.endpoint("api/v1/artists").expect("join endpoint");
        assert_eq!(endpoint.as_str(), "http://localhost:8080/api/v1/artists");
    }

    #[rstest]
    fn base_url_with_a_path_keeps_it() {
        let client = ApiClient::new("http://localhost:8080/kanora").expect("valid base URL");
        let endpoint = client.endpoint("api/v1/artists").expect("join endpoint");
        assert_eq!(
            endpoint.as_str(),
            "http://localhost:8080/kanora/api/v1/artists"
        );
    }

    #[rstest]
    fn malformed_base_urls_are_rejected() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ClientError::BaseUrl(_))
        ));
    }

    #[tokio::test]
    async fn reported_failures_become_unsuccessful_envelopes() {
        let response = json_response(500, r#"{"code":"internal_error","message":"boom"}"#);
        let envelope: ApiResponse<()> = failure_from_response(response)
            .await
            .expect("payload is readable");
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("boom"));
    }

    #[tokio::test]
    async fn unreadable_failures_surface_as_client_errors() {
        let response = json_response(502, "<html>bad gateway</html>");
        let err = failure_from_response::<()>(response)
            .await
            .expect_err("payload is not readable");
        assert!(matches!(
            err,
            ClientError::UnexpectedStatus(StatusCode::BAD_GATEWAY)
        ));
    }
}
