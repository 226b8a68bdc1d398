//! SQLite-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::user::{DisplayName, User, UserId};

use super::diesel_helpers::{
    DbFailure, classify_diesel_error, classify_join_error, classify_pool_error,
};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn user_failure(failure: DbFailure) -> UserPersistenceError {
    match failure {
        DbFailure::Connection(message) => UserPersistenceError::connection(message),
        DbFailure::Query(message) => UserPersistenceError::query(message),
    }
}

/// Convert a database row to a domain user, rejecting corrupt records.
fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let id =
        UserId::new(&row.id).map_err(|_| UserPersistenceError::query("invalid user id in database"))?;
    let display_name = DisplayName::new(&row.display_name)
        .map_err(|_| UserPersistenceError::query("invalid display name in database"))?;
    Ok(User::new(id, display_name))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn upsert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let pool = self.pool.clone();
        let user = user.clone();
        tokio::task::spawn_blocking(move || -> Result<(), DbFailure> {
            let mut conn = pool.get().map_err(classify_pool_error)?;
            let new_row = NewUserRow {
                id: user.id.as_ref(),
                display_name: user.display_name.as_ref(),
            };
            diesel::insert_into(users::table)
                .values(&new_row)
                .on_conflict(users::id)
                .do_update()
                .set(users::display_name.eq(user.display_name.as_ref()))
                .execute(&mut conn)
                .map_err(classify_diesel_error)?;
            Ok(())
        })
        .await
        .map_err(|err| user_failure(classify_join_error(err)))?
        .map_err(user_failure)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let pool = self.pool.clone();
        let id_text = id.to_string();
        let row = tokio::task::spawn_blocking(move || -> Result<Option<UserRow>, DbFailure> {
            let mut conn = pool.get().map_err(classify_pool_error)?;
            users::table
                .find(&id_text)
                .select(UserRow::as_select())
                .first(&mut conn)
                .optional()
                .map_err(classify_diesel_error)
        })
        .await
        .map_err(|err| user_failure(classify_join_error(err)))?
        .map_err(user_failure)?;

        row.map(row_to_user).transpose()
    }
}
