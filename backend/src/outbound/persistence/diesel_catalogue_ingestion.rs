//! SQLite-backed `CatalogueIngestion` implementation using Diesel ORM.
//!
//! Write adapter used by example-data seeding and library ingestion. Every
//! operation is an upsert so re-running a seed converges instead of failing
//! on duplicate keys.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::catalog::{Album, Artist};
use crate::domain::ports::{CatalogueError, CatalogueIngestion};

use super::diesel_helpers::{
    DbFailure, classify_diesel_error, classify_join_error, classify_pool_error,
};
use super::models::{NewAlbumRow, NewArtistRow};
use super::pool::DbPool;
use super::schema::{albums, artists};

/// Diesel-backed implementation of the `CatalogueIngestion` port.
#[derive(Clone)]
pub struct DieselCatalogueIngestion {
    pool: DbPool,
}

impl DieselCatalogueIngestion {
    /// Create a new ingestion adapter with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn ingestion_failure(failure: DbFailure) -> CatalogueError {
    match failure {
        DbFailure::Connection(message) => CatalogueError::connection(message),
        DbFailure::Query(message) => CatalogueError::query(message),
    }
}

#[async_trait]
impl CatalogueIngestion for DieselCatalogueIngestion {
    async fn upsert_artist(&self, artist: &Artist) -> Result<(), CatalogueError> {
        let pool = self.pool.clone();
        let artist = artist.clone();
        tokio::task::spawn_blocking(move || -> Result<(), DbFailure> {
            let mut conn = pool.get().map_err(classify_pool_error)?;
            let new_row = NewArtistRow {
                id: artist.id.as_ref(),
                name: &artist.name,
                bio: artist.bio.as_deref(),
            };
            diesel::insert_into(artists::table)
                .values(&new_row)
                .on_conflict(artists::id)
                .do_update()
                .set((
                    artists::name.eq(&artist.name),
                    artists::bio.eq(artist.bio.as_deref()),
                ))
                .execute(&mut conn)
                .map_err(classify_diesel_error)?;
            Ok(())
        })
        .await
        .map_err(|err| ingestion_failure(classify_join_error(err)))?
        .map_err(ingestion_failure)
    }

    async fn upsert_album(&self, album: &Album) -> Result<(), CatalogueError> {
        let pool = self.pool.clone();
        let album = album.clone();
        tokio::task::spawn_blocking(move || -> Result<(), DbFailure> {
            let mut conn = pool.get().map_err(classify_pool_error)?;
            let new_row = NewAlbumRow {
                id: album.id.as_ref(),
                artist_id: album.artist_id.as_ref(),
                title: &album.title,
                cover_art_url: album.cover_art_url.as_deref(),
                release_date: album.release_date,
            };
            diesel::insert_into(albums::table)
                .values(&new_row)
                .on_conflict(albums::id)
                .do_update()
                .set((
                    albums::artist_id.eq(album.artist_id.as_ref()),
                    albums::title.eq(&album.title),
                    albums::cover_art_url.eq(album.cover_art_url.as_deref()),
                    albums::release_date.eq(album.release_date),
                ))
                .execute(&mut conn)
                .map_err(classify_diesel_error)?;
            Ok(())
        })
        .await
        .map_err(|err| ingestion_failure(classify_join_error(err)))?
        .map_err(ingestion_failure)
    }
}
