//! Deterministic sample-library generation for demonstration purposes.
//!
//! A named seed fully determines the generated artists and albums: the seed
//! name is hashed into the RNG state, so the same name reproduces the same
//! library on every run and across machines. Identifiers are derived from
//! the same RNG stream, which keeps re-seeding idempotent when the consumer
//! upserts by id.

use fake::Fake;
use fake::faker::lorem::en::Words;
use fake::faker::name::en::Name;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sample album belonging to a generated artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleAlbum {
    /// Deterministic album identifier.
    pub id: Uuid,
    /// Generated album title.
    pub title: String,
    /// Cover-art URL for roughly two thirds of albums.
    pub cover_art_url: Option<String>,
    /// Release date in `YYYY-MM-DD` form for most albums.
    pub release_date: Option<String>,
}

/// Sample artist with a small discography.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleArtist {
    /// Deterministic artist identifier.
    pub id: Uuid,
    /// Generated artist name.
    pub name: String,
    /// Short biography for roughly half the artists.
    pub bio: Option<String>,
    /// Generated albums, zero to five per artist.
    pub albums: Vec<SampleAlbum>,
}

/// Hash a seed name into RNG state (FNV-1a, 64 bit).
fn seed_from_name(seed_name: &str) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for byte in seed_name.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

fn deterministic_id(rng: &mut ChaCha8Rng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.random()).into_uuid()
}

fn title_case(words: &[String]) -> String {
    let mut title = String::new();
    for word in words {
        if !title.is_empty() {
            title.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            title.extend(first.to_uppercase());
            title.push_str(chars.as_str());
        }
    }
    title
}

fn generate_album(rng: &mut ChaCha8Rng) -> SampleAlbum {
    let id = deterministic_id(rng);
    let words: Vec<String> = Words(1..4).fake_with_rng(rng);
    let title = title_case(&words);

    let cover_art_url = rng
        .random_bool(0.66)
        .then(|| format!("https://covers.kanora.example/{}.jpg", id.simple()));

    let release_date = rng.random_bool(0.8).then(|| {
        let year: i32 = rng.random_range(1972..=2024);
        let month: u32 = rng.random_range(1..=12);
        let day: u32 = rng.random_range(1..=28);
        format!("{year:04}-{month:02}-{day:02}")
    });

    SampleAlbum {
        id,
        title,
        cover_art_url,
        release_date,
    }
}

fn generate_artist(rng: &mut ChaCha8Rng) -> SampleArtist {
    let id = deterministic_id(rng);
    let name: String = Name().fake_with_rng(rng);

    let bio = rng.random_bool(0.5).then(|| {
        let words: Vec<String> = Words(8..16).fake_with_rng(rng);
        let mut sentence = words.join(" ");
        sentence.push('.');
        title_case_first(&mut sentence);
        sentence
    });

    let album_count: usize = rng.random_range(0..=5);
    let albums = (0..album_count).map(|_| generate_album(rng)).collect();

    SampleArtist {
        id,
        name,
        bio,
        albums,
    }
}

fn title_case_first(sentence: &mut String) {
    if let Some(first) = sentence.chars().next() {
        let upper: String = first.to_uppercase().collect();
        sentence.replace_range(0..first.len_utf8(), &upper);
    }
}

/// Generate a deterministic sample library.
///
/// The same `seed_name` and `artist_count` always produce the same library,
/// including identifiers.
#[must_use]
pub fn generate_library(seed_name: &str, artist_count: usize) -> Vec<SampleArtist> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed_from_name(seed_name));
    (0..artist_count).map(|_| generate_artist(&mut rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn same_seed_reproduces_the_same_library() {
        let first = generate_library("mossy-owl", 5);
        let second = generate_library("mossy-owl", 5);
        assert_eq!(first, second);
    }

    #[rstest]
    fn different_seeds_produce_different_libraries() {
        let first = generate_library("mossy-owl", 5);
        let second = generate_library("polar-night", 5);
        assert_ne!(first, second);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(12)]
    fn artist_count_is_respected(#[case] count: usize) {
        assert_eq!(generate_library("mossy-owl", count).len(), count);
    }

    #[rstest]
    fn generated_entities_are_well_formed() {
        let library = generate_library("well-formed", 20);
        for artist in &library {
            assert!(!artist.name.is_empty());
            assert!(artist.albums.len() <= 5);
            for album in &artist.albums {
                assert!(!album.title.is_empty());
                if let Some(date) = &album.release_date {
                    assert_eq!(date.len(), 10, "date {date} is not YYYY-MM-DD");
                }
            }
        }
    }

    #[rstest]
    fn identifiers_are_unique_within_a_library() {
        let library = generate_library("unique-ids", 20);
        let mut ids: Vec<Uuid> = library.iter().map(|artist| artist.id).collect();
        ids.extend(
            library
                .iter()
                .flat_map(|artist| artist.albums.iter().map(|album| album.id)),
        );
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
