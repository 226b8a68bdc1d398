//! SQLite-backed `ArtistCatalogueQuery` implementation using Diesel ORM.
//!
//! Read-only adapter for the browse listing and the artist detail page.
//! Album ordering relies on SQLite placing `NULL` last under `DESC`, so
//! undated albums sort after dated ones.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::catalog::{Album, AlbumId, Artist, ArtistId, ArtistListing, ArtistWithAlbums};
use crate::domain::ports::{ArtistCatalogueQuery, CatalogueError};

use super::diesel_helpers::{
    DbFailure, classify_diesel_error, classify_join_error, classify_pool_error,
};
use super::models::{AlbumRow, ArtistRow};
use super::pool::DbPool;
use super::schema::{albums, artists};

/// Diesel-backed implementation of the `ArtistCatalogueQuery` port.
#[derive(Clone)]
pub struct DieselArtistCatalogue {
    pool: DbPool,
}

impl DieselArtistCatalogue {
    /// Create a new catalogue with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn catalogue_failure(failure: DbFailure) -> CatalogueError {
    match failure {
        DbFailure::Connection(message) => CatalogueError::connection(message),
        DbFailure::Query(message) => CatalogueError::query(message),
    }
}

/// Convert a database row to a domain artist, rejecting corrupt identifiers.
fn row_to_artist(row: ArtistRow) -> Result<Artist, CatalogueError> {
    let id = ArtistId::new(&row.id)
        .map_err(|_| CatalogueError::query("invalid artist id in database"))?;
    Ok(Artist {
        id,
        name: row.name,
        bio: row.bio,
    })
}

/// Convert a database row to a domain album, rejecting corrupt identifiers.
fn row_to_album(row: AlbumRow) -> Result<Album, CatalogueError> {
    let id =
        AlbumId::new(&row.id).map_err(|_| CatalogueError::query("invalid album id in database"))?;
    let artist_id = ArtistId::new(&row.artist_id)
        .map_err(|_| CatalogueError::query("invalid artist id in database"))?;
    Ok(Album {
        id,
        artist_id,
        title: row.title,
        cover_art_url: row.cover_art_url,
        release_date: row.release_date,
    })
}

#[async_trait]
impl ArtistCatalogueQuery for DieselArtistCatalogue {
    async fn list_artists(&self) -> Result<Vec<ArtistListing>, CatalogueError> {
        let pool = self.pool.clone();
        let (artist_rows, counts) = tokio::task::spawn_blocking(
            move || -> Result<(Vec<ArtistRow>, Vec<(String, i64)>), DbFailure> {
                let mut conn = pool.get().map_err(classify_pool_error)?;
                let artist_rows = artists::table
                    .order(artists::name.asc())
                    .select(ArtistRow::as_select())
                    .load(&mut conn)
                    .map_err(classify_diesel_error)?;
                let counts = albums::table
                    .group_by(albums::artist_id)
                    .select((albums::artist_id, diesel::dsl::count_star()))
                    .load::<(String, i64)>(&mut conn)
                    .map_err(classify_diesel_error)?;
                Ok((artist_rows, counts))
            },
        )
        .await
        .map_err(|err| catalogue_failure(classify_join_error(err)))?
        .map_err(catalogue_failure)?;

        let counts: HashMap<String, u32> = counts
            .into_iter()
            .map(|(artist_id, count)| (artist_id, u32::try_from(count).unwrap_or(u32::MAX)))
            .collect();

        artist_rows
            .into_iter()
            .map(|row| {
                let album_count = counts.get(&row.id).copied().unwrap_or(0);
                Ok(ArtistListing {
                    artist: row_to_artist(row)?,
                    album_count,
                })
            })
            .collect()
    }

    async fn artist_with_albums(
        &self,
        id: &ArtistId,
    ) -> Result<Option<ArtistWithAlbums>, CatalogueError> {
        let pool = self.pool.clone();
        let id_text = id.to_string();
        let rows = tokio::task::spawn_blocking(
            move || -> Result<Option<(ArtistRow, Vec<AlbumRow>)>, DbFailure> {
                let mut conn = pool.get().map_err(classify_pool_error)?;
                let artist_row: Option<ArtistRow> = artists::table
                    .find(&id_text)
                    .select(ArtistRow::as_select())
                    .first(&mut conn)
                    .optional()
                    .map_err(classify_diesel_error)?;

                let Some(artist_row) = artist_row else {
                    return Ok(None);
                };

                let album_rows = albums::table
                    .filter(albums::artist_id.eq(&id_text))
                    .order((albums::release_date.desc(), albums::title.asc()))
                    .select(AlbumRow::as_select())
                    .load(&mut conn)
                    .map_err(classify_diesel_error)?;

                Ok(Some((artist_row, album_rows)))
            },
        )
        .await
        .map_err(|err| catalogue_failure(classify_join_error(err)))?
        .map_err(catalogue_failure)?;

        let Some((artist_row, album_rows)) = rows else {
            return Ok(None);
        };

        let artist = row_to_artist(artist_row)?;
        let albums = album_rows
            .into_iter()
            .map(row_to_album)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(ArtistWithAlbums { artist, albums }))
    }
}
