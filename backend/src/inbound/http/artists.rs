//! Artist catalogue read endpoints.
//!
//! ```text
//! GET /api/v1/artists
//! GET /api/v1/artists/{id}
//! ```

use actix_web::{HttpResponse, get, web};
use kanora_types::{AlbumSummary, ArtistDetails, ArtistSummary};
use serde_json::json;

use crate::domain::catalog::{Album, ArtistId, ArtistListing, ArtistWithAlbums};
use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::private_no_cache_header;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

fn invalid_artist_id_error(raw: &str) -> Error {
    Error::invalid_request("artist id must be a valid UUID").with_details(json!({
        "field": "id",
        "value": raw,
        "code": "invalid_uuid",
    }))
}

fn parse_artist_id(raw: &str) -> Result<ArtistId, Error> {
    ArtistId::new(raw).map_err(|_| invalid_artist_id_error(raw))
}

fn listing_to_summary(listing: ArtistListing) -> ArtistSummary {
    ArtistSummary {
        id: listing.artist.id.to_string(),
        name: listing.artist.name,
        album_count: listing.album_count,
    }
}

fn album_to_summary(album: Album) -> AlbumSummary {
    AlbumSummary {
        id: album.id.to_string(),
        title: album.title,
        cover_art_url: album.cover_art_url,
        release_date: album.release_date.map(|date| date.to_string()),
    }
}

fn details_response(entry: ArtistWithAlbums) -> ArtistDetails {
    ArtistDetails {
        id: entry.artist.id.to_string(),
        name: entry.artist.name,
        bio: entry.artist.bio,
        albums: entry.albums.into_iter().map(album_to_summary).collect(),
    }
}

/// List all artists for the browse page.
#[utoipa::path(
    get,
    path = "/api/v1/artists",
    description = "Return all artists ordered by name, with album counts.",
    responses(
        (
            status = 200,
            description = "Artist listing",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = [ArtistSummary]
        ),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["artists"],
    operation_id = "listArtists"
)]
#[get("/artists")]
pub async fn list_artists(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let _user_id = session.require_user_id()?;
    let listings = state.catalogue.list_artists().await.map_err(Error::from)?;
    let summaries: Vec<ArtistSummary> = listings.into_iter().map(listing_to_summary).collect();
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(summaries))
}

/// Fetch one artist with its albums, newest release first.
#[utoipa::path(
    get,
    path = "/api/v1/artists/{id}",
    description = "Return one artist with its albums ordered newest first.",
    params(
        ("id" = String, Path, description = "Artist identifier (UUID)")
    ),
    responses(
        (
            status = 200,
            description = "Artist detail",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = ArtistDetails
        ),
        (status = 400, description = "Malformed artist id", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Artist not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["artists"],
    operation_id = "getArtistDetails"
)]
#[get("/artists/{id}")]
pub async fn get_artist_details(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let _user_id = session.require_user_id()?;
    let artist_id = parse_artist_id(&path.into_inner())?;
    let entry = state
        .catalogue
        .artist_with_albums(&artist_id)
        .await
        .map_err(Error::from)?
        .ok_or_else(|| Error::not_found("artist not found"))?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(details_response(entry)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::catalog::{AlbumId, Artist};
    use actix_web::{App, test as actix_test, web};
    use kanora_types::LoginRequest;
    use rstest::rstest;
    use serde_json::Value;

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(HttpState::fixtures()))
            .wrap(crate::inbound::http::test_utils::test_session_middleware())
            .service(
                web::scope("/api/v1")
                    .service(crate::inbound::http::users::login)
                    .service(list_artists)
                    .service(get_artist_details),
            )
    }

    async fn login_cookie<S>(app: &S) -> actix_web::cookie::Cookie<'static>
    where
        S: actix_web::dev::Service<
                actix_http::Request,
                Response = actix_web::dev::ServiceResponse,
                Error = actix_web::Error,
            >,
    {
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(LoginRequest {
                username: "admin".to_owned(),
                password: "password".to_owned(),
            })
            .to_request();
        let response = actix_test::call_service(app, request).await;
        assert!(response.status().is_success());
        response
            .response()
            .cookies()
            .find(|c| c.name() == "session")
            .expect("session cookie")
            .into_owned()
    }

    #[rstest]
    fn parse_artist_id_flags_malformed_input() {
        let err = parse_artist_id("42").expect_err("malformed id");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        let details = err
            .details()
            .and_then(|value| value.as_object())
            .expect("details");
        assert_eq!(details.get("field").and_then(Value::as_str), Some("id"));
        assert_eq!(
            details.get("code").and_then(Value::as_str),
            Some("invalid_uuid")
        );
    }

    #[rstest]
    fn details_response_keeps_album_order_and_formats_dates() {
        let artist_id =
            ArtistId::new("11111111-1111-4111-8111-111111111111").expect("artist id");
        let entry = ArtistWithAlbums {
            artist: Artist {
                id: artist_id.clone(),
                name: "Nordlys".to_owned(),
                bio: None,
            },
            albums: vec![Album {
                id: AlbumId::new("aaaaaaa1-aaaa-4aaa-8aaa-aaaaaaaaaaa1").expect("album id"),
                artist_id,
                title: "Polar Night".to_owned(),
                cover_art_url: None,
                release_date: chrono::NaiveDate::from_ymd_opt(2021, 11, 5),
            }],
        };

        let details = details_response(entry);
        assert_eq!(details.name, "Nordlys");
        assert_eq!(
            details.albums.first().and_then(|a| a.release_date.as_deref()),
            Some("2021-11-05")
        );
    }

    #[actix_web::test]
    async fn list_artists_requires_a_session() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/artists")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn list_artists_returns_the_sample_catalogue() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/artists")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("response JSON");
        let names: Vec<&str> = value
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|entry| entry.get("name").and_then(Value::as_str))
            .collect();
        assert_eq!(names, vec!["Nordlys", "Veiled Harbour"]);
        let first = value.as_array().and_then(|a| a.first()).expect("entry");
        assert_eq!(first.get("albumCount").and_then(Value::as_u64), Some(2));
    }

    #[actix_web::test]
    async fn artist_details_returns_albums_newest_first() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/artists/11111111-1111-4111-8111-111111111111")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("response JSON");
        assert_eq!(value.get("name").and_then(Value::as_str), Some("Nordlys"));
        let titles: Vec<&str> = value
            .get("albums")
            .and_then(Value::as_array)
            .expect("albums array")
            .iter()
            .filter_map(|album| album.get("title").and_then(Value::as_str))
            .collect();
        assert_eq!(titles, vec!["Polar Night", "Midnight Sun"]);
    }

    #[rstest]
    #[case("/api/v1/artists/not-a-uuid", actix_web::http::StatusCode::BAD_REQUEST)]
    #[case(
        "/api/v1/artists/99999999-9999-4999-8999-999999999999",
        actix_web::http::StatusCode::NOT_FOUND
    )]
    #[actix_web::test]
    async fn artist_details_maps_bad_input_and_missing_artists(
        #[case] uri: &str,
        #[case] expected: actix_web::http::StatusCode,
    ) {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(uri)
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), expected);
    }
}
