//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation. When migrations change the schema, update this file to match.

diesel::table! {
    /// User accounts referenced by the session cookie.
    users (id) {
        /// Primary key: UUID in canonical text form.
        id -> Text,
        /// Human-readable display name (max 64 characters).
        display_name -> Text,
        /// Record creation timestamp.
        created_at -> Timestamp,
        /// Last modification timestamp.
        updated_at -> Timestamp,
    }
}

diesel::table! {
    /// Library artists.
    artists (id) {
        /// Primary key: UUID in canonical text form.
        id -> Text,
        /// Artist display name.
        name -> Text,
        /// Optional biography.
        bio -> Nullable<Text>,
        /// Record creation timestamp.
        created_at -> Timestamp,
        /// Last modification timestamp.
        updated_at -> Timestamp,
    }
}

diesel::table! {
    /// Albums owned by an artist.
    albums (id) {
        /// Primary key: UUID in canonical text form.
        id -> Text,
        /// Owning artist; cascades on delete.
        artist_id -> Text,
        /// Album title.
        title -> Text,
        /// Optional cover-art URL.
        cover_art_url -> Nullable<Text>,
        /// Optional release date.
        release_date -> Nullable<Date>,
        /// Record creation timestamp.
        created_at -> Timestamp,
        /// Last modification timestamp.
        updated_at -> Timestamp,
    }
}

diesel::joinable!(albums -> artists (artist_id));
diesel::allow_tables_to_appear_in_same_query!(albums, artists);
