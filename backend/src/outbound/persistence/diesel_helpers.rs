//! Shared failure classification for Diesel adapters.
//!
//! Every repository distinguishes connection failures (the service is
//! degraded, 503) from query failures (a bug or bad data, 500). This module
//! classifies the raw error sources once so adapters only map the
//! classification onto their own port error type.

use tracing::debug;

use super::pool::PoolError;

/// Database failure classified by recoverability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DbFailure {
    /// The database could not be reached or a connection checked out.
    Connection(String),
    /// A statement failed or returned malformed data.
    Query(String),
}

/// Classify pool errors: both build and checkout failures mean the database
/// is unreachable from the caller's perspective.
pub(crate) fn classify_pool_error(error: PoolError) -> DbFailure {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            DbFailure::Connection(message)
        }
    }
}

/// Classify Diesel errors, logging the underlying detail at debug level so
/// the redacted message returned to callers stays generic.
pub(crate) fn classify_diesel_error(error: diesel::result::Error) -> DbFailure {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DbFailure::Connection("database connection error".to_owned())
        }
        DieselError::NotFound => DbFailure::Query("record not found".to_owned()),
        _ => DbFailure::Query("database error".to_owned()),
    }
}

/// Classify a blocking-task join failure. The closure result never reaches
/// the caller, so report it as a query failure.
pub(crate) fn classify_join_error(error: tokio::task::JoinError) -> DbFailure {
    debug!(error = %error, "database task failed to complete");
    DbFailure::Query("database task failed to complete".to_owned())
}
