//! Catalogue entities: artists and the albums they own.

use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

use super::user::InvalidIdError;

/// Validated artist identifier (canonical UUID text).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtistId(String);

impl ArtistId {
    /// Parse an identifier, normalising it to canonical hyphenated form.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, InvalidIdError> {
        let parsed = Uuid::parse_str(raw.as_ref())?;
        Ok(Self(parsed.to_string()))
    }

    /// Wrap an already-parsed UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for ArtistId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated album identifier (canonical UUID text).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlbumId(String);

impl AlbumId {
    /// Parse an identifier, normalising it to canonical hyphenated form.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, InvalidIdError> {
        let parsed = Uuid::parse_str(raw.as_ref())?;
        Ok(Self(parsed.to_string()))
    }

    /// Wrap an already-parsed UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for AlbumId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A library artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    /// Stable artist identifier.
    pub id: ArtistId,
    /// Artist display name.
    pub name: String,
    /// Biography, when the library has one.
    pub bio: Option<String>,
}

/// An album owned by an artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    /// Stable album identifier.
    pub id: AlbumId,
    /// Identifier of the owning artist.
    pub artist_id: ArtistId,
    /// Album title.
    pub title: String,
    /// Cover-art URL, when the library has one.
    pub cover_art_url: Option<String>,
    /// Release date, when known.
    pub release_date: Option<NaiveDate>,
}

/// Browse-listing entry: an artist and how many albums the library holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistListing {
    /// The listed artist.
    pub artist: Artist,
    /// Number of albums attributed to the artist.
    pub album_count: u32,
}

/// Detail aggregate: an artist together with its albums.
///
/// Albums are ordered by release date, newest first; undated albums sort
/// last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistWithAlbums {
    /// The artist record.
    pub artist: Artist,
    /// Albums owned by the artist.
    pub albums: Vec<Album>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn artist_id_round_trips_through_display() {
        let id = ArtistId::new("7c9e6679-7425-40de-944b-e07fc1f90ae7").expect("valid uuid");
        assert_eq!(id.to_string(), "7c9e6679-7425-40de-944b-e07fc1f90ae7");
    }

    #[rstest]
    #[case("")]
    #[case("42")]
    #[case("7c9e6679-7425-40de-944b")]
    fn artist_id_rejects_malformed_input(#[case] raw: &str) {
        assert!(ArtistId::new(raw).is_err());
    }
}
