//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations. Timestamp columns are
//! maintained by the database and not read back, so the row structs select
//! only the columns the adapters use.

use chrono::NaiveDate;
use diesel::prelude::*;

use super::schema::{albums, artists, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub id: String,
    pub display_name: String,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: &'a str,
    pub display_name: &'a str,
}

/// Row struct for reading from the artists table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = artists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ArtistRow {
    pub id: String,
    pub name: String,
    pub bio: Option<String>,
}

/// Insertable struct for creating new artist records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = artists)]
pub(crate) struct NewArtistRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub bio: Option<&'a str>,
}

/// Row struct for reading from the albums table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = albums)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct AlbumRow {
    pub id: String,
    pub artist_id: String,
    pub title: String,
    pub cover_art_url: Option<String>,
    pub release_date: Option<NaiveDate>,
}

/// Insertable struct for creating new album records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = albums)]
pub(crate) struct NewAlbumRow<'a> {
    pub id: &'a str,
    pub artist_id: &'a str,
    pub title: &'a str,
    pub cover_art_url: Option<&'a str>,
    pub release_date: Option<NaiveDate>,
}
