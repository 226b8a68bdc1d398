//! Startup seeding of a deterministic sample library.
//!
//! Enabled by the `example-data` cargo feature and the
//! `KANORA_EXAMPLE_DATA` environment toggle. Seeding upserts through the
//! ingestion port, so repeated startups with the same seed converge on the
//! same library instead of duplicating rows.

use std::env;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::domain::catalog::{Album, AlbumId, Artist, ArtistId};
use crate::domain::ports::{CatalogueError, CatalogueIngestion};

/// Environment toggle enabling seeding.
pub const ENABLE_VAR: &str = "KANORA_EXAMPLE_DATA";
/// Environment variable naming the deterministic seed.
pub const SEED_VAR: &str = "KANORA_EXAMPLE_DATA_SEED";
/// Environment variable setting how many artists to generate.
pub const COUNT_VAR: &str = "KANORA_EXAMPLE_DATA_COUNT";

const DEFAULT_SEED: &str = "northern-lights";
const DEFAULT_COUNT: usize = 12;

/// Settings controlling startup seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleDataSettings {
    /// Whether seeding runs at startup.
    pub is_enabled: bool,
    /// Deterministic seed name.
    pub seed_name: String,
    /// Number of artists to generate.
    pub artist_count: usize,
}

impl ExampleDataSettings {
    /// Read settings from the environment.
    ///
    /// Seeding is enabled when `KANORA_EXAMPLE_DATA` is `1` or `true`; a
    /// malformed count falls back to the default with a warning.
    pub fn from_env() -> Self {
        let is_enabled = env::var(ENABLE_VAR)
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let seed_name = env::var(SEED_VAR).unwrap_or_else(|_| DEFAULT_SEED.to_owned());
        let artist_count = env::var(COUNT_VAR)
            .ok()
            .map(|raw| match raw.parse::<usize>() {
                Ok(count) => count,
                Err(err) => {
                    warn!(value = %raw, error = %err, "invalid {COUNT_VAR}; using default");
                    DEFAULT_COUNT
                }
            })
            .unwrap_or(DEFAULT_COUNT);

        Self {
            is_enabled,
            seed_name,
            artist_count,
        }
    }
}

/// Counts reported after a successful seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOutcome {
    /// Number of artists upserted.
    pub artists: usize,
    /// Number of albums upserted.
    pub albums: usize,
}

/// Errors raised while seeding the sample library.
#[derive(Debug, thiserror::Error)]
pub enum SeedingError {
    /// Persisting a generated record failed.
    #[error("catalogue ingestion failed: {0}")]
    Ingestion(#[from] CatalogueError),
}

fn sample_to_artist(sample: &example_data::SampleArtist) -> Artist {
    Artist {
        id: ArtistId::from_uuid(sample.id),
        name: sample.name.clone(),
        bio: sample.bio.clone(),
    }
}

fn sample_to_album(artist_id: &ArtistId, sample: &example_data::SampleAlbum) -> Album {
    let release_date = sample
        .release_date
        .as_deref()
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok());
    Album {
        id: AlbumId::from_uuid(sample.id),
        artist_id: artist_id.clone(),
        title: sample.title.clone(),
        cover_art_url: sample.cover_art_url.clone(),
        release_date,
    }
}

/// Seed the sample library when enabled.
///
/// Returns `Ok(None)` when seeding is disabled.
///
/// # Errors
///
/// Fails when a generated record cannot be persisted; partially applied
/// seeds are safe to retry because every write is an upsert.
pub async fn seed_example_data(
    settings: &ExampleDataSettings,
    ingestion: &dyn CatalogueIngestion,
) -> Result<Option<SeedOutcome>, SeedingError> {
    if !settings.is_enabled {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(None);
    }

    let library = example_data::generate_library(&settings.seed_name, settings.artist_count);

    let mut album_total = 0usize;
    for sample in &library {
        let artist = sample_to_artist(sample);
        ingestion.upsert_artist(&artist).await?;
        for album_sample in &sample.albums {
            let album = sample_to_album(&artist.id, album_sample);
            ingestion.upsert_album(&album).await?;
            album_total += 1;
        }
    }

    let outcome = SeedOutcome {
        artists: library.len(),
        albums: album_total,
    };
    info!(
        seed = %settings.seed_name,
        artists = outcome.artists,
        albums = outcome.albums,
        "example data seeded"
    );
    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    #[derive(Default)]
    struct RecordingIngestion {
        artists: Mutex<Vec<Artist>>,
        albums: Mutex<Vec<Album>>,
    }

    #[async_trait]
    impl CatalogueIngestion for RecordingIngestion {
        async fn upsert_artist(&self, artist: &Artist) -> Result<(), CatalogueError> {
            self.artists
                .lock()
                .expect("artists lock")
                .push(artist.clone());
            Ok(())
        }

        async fn upsert_album(&self, album: &Album) -> Result<(), CatalogueError> {
            self.albums.lock().expect("albums lock").push(album.clone());
            Ok(())
        }
    }

    fn settings(enabled: bool) -> ExampleDataSettings {
        ExampleDataSettings {
            is_enabled: enabled,
            seed_name: "mossy-owl".to_owned(),
            artist_count: 4,
        }
    }

    #[tokio::test]
    async fn disabled_settings_skip_seeding() {
        let ingestion = RecordingIngestion::default();
        let outcome = seed_example_data(&settings(false), &ingestion)
            .await
            .expect("seeding succeeds");
        assert!(outcome.is_none());
        assert!(ingestion.artists.lock().expect("artists lock").is_empty());
    }

    #[tokio::test]
    async fn enabled_settings_upsert_the_generated_library() {
        let ingestion = RecordingIngestion::default();
        let outcome = seed_example_data(&settings(true), &ingestion)
            .await
            .expect("seeding succeeds")
            .expect("seeding ran");

        assert_eq!(outcome.artists, 4);
        let artists = ingestion.artists.lock().expect("artists lock");
        let albums = ingestion.albums.lock().expect("albums lock");
        assert_eq!(artists.len(), outcome.artists);
        assert_eq!(albums.len(), outcome.albums);
        for album in albums.iter() {
            assert!(artists.iter().any(|artist| artist.id == album.artist_id));
        }
    }

    #[tokio::test]
    async fn seeding_twice_produces_identical_records() {
        let first = RecordingIngestion::default();
        let second = RecordingIngestion::default();
        let config = settings(true);
        let _ = seed_example_data(&config, &first).await.expect("first run");
        let _ = seed_example_data(&config, &second)
            .await
            .expect("second run");
        assert_eq!(
            *first.artists.lock().expect("artists lock"),
            *second.artists.lock().expect("artists lock")
        );
    }
}
