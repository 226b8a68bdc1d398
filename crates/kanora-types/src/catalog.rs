//! Catalogue data-transfer types: artists and their albums.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Artist row as returned by the browse listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ArtistSummary {
    /// Stable artist identifier (UUID).
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    /// Artist display name.
    #[schema(example = "Ola Nordmann")]
    pub name: String,
    /// Number of albums in the library for this artist.
    #[schema(example = 3)]
    pub album_count: u32,
}

/// Album entry nested inside an artist detail response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct AlbumSummary {
    /// Stable album identifier (UUID).
    #[schema(example = "7c9e6679-7425-40de-944b-e07fc1f90ae7")]
    pub id: String,
    /// Album title.
    #[schema(example = "Northern Lights")]
    pub title: String,
    /// Cover-art URL, when the library has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_art_url: Option<String>,
    /// Release date as an ISO 8601 calendar date, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2019-06-21")]
    pub release_date: Option<String>,
}

/// Artist detail payload: the artist plus its albums, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ArtistDetails {
    /// Stable artist identifier (UUID).
    pub id: String,
    /// Artist display name.
    pub name: String,
    /// Biography, when the library has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Albums by this artist, ordered by release date, newest first.
    pub albums: Vec<AlbumSummary>,
}

impl AlbumSummary {
    /// Release year extracted from the ISO 8601 release date, when present.
    #[must_use]
    pub fn release_year(&self) -> Option<&str> {
        self.release_date.as_deref().and_then(|date| date.get(..4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn album(release_date: Option<&str>) -> AlbumSummary {
        AlbumSummary {
            id: "7c9e6679-7425-40de-944b-e07fc1f90ae7".to_owned(),
            title: "Northern Lights".to_owned(),
            cover_art_url: None,
            release_date: release_date.map(str::to_owned),
        }
    }

    #[rstest]
    #[case(Some("2019-06-21"), Some("2019"))]
    #[case(None, None)]
    fn release_year_comes_from_release_date(
        #[case] date: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(album(date).release_year(), expected);
    }

    #[rstest]
    fn artist_details_serialises_camel_case_and_omits_empty_options() {
        let details = ArtistDetails {
            id: "3fa85f64-5717-4562-b3fc-2c963f66afa6".to_owned(),
            name: "Ola Nordmann".to_owned(),
            bio: None,
            albums: vec![album(Some("2019-06-21"))],
        };

        let value = serde_json::to_value(&details).expect("details serialise");
        assert!(value.get("bio").is_none());
        let first = value
            .get("albums")
            .and_then(|albums| albums.get(0))
            .expect("one album");
        assert_eq!(
            first.get("releaseDate").and_then(|v| v.as_str()),
            Some("2019-06-21")
        );
        assert!(first.get("coverArtUrl").is_none());
    }
}
