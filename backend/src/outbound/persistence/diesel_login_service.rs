//! Diesel-backed `LoginService` adapter built on `DieselUserRepository`.
//!
//! Preserves the fixture login contract (`admin`/`password`) while ensuring
//! the authenticated fixture user exists in the database so `/users/me` and
//! audit joins resolve.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    FIXTURE_DISPLAY_NAME, FIXTURE_PASSWORD, FIXTURE_USER_ID, FIXTURE_USERNAME, LoginService,
    UserRepository,
};
use crate::domain::{DisplayName, Error, LoginCredentials, User, UserId};

use super::diesel_user_repository::DieselUserRepository;

/// Diesel-backed `LoginService` that preserves fixture-authentication
/// semantics.
#[derive(Clone)]
pub struct DieselLoginService {
    user_repository: Arc<dyn UserRepository>,
}

impl DieselLoginService {
    /// Create a new service backed by a Diesel user repository.
    pub fn new(user_repository: DieselUserRepository) -> Self {
        Self {
            user_repository: Arc::new(user_repository),
        }
    }

    #[cfg(test)]
    fn from_repository(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    async fn ensure_fixture_user_exists(&self, user_id: &UserId) -> Result<(), Error> {
        let existing = self
            .user_repository
            .find_by_id(user_id)
            .await
            .map_err(Error::from)?;

        if existing.is_some() {
            return Ok(());
        }

        let display_name = DisplayName::new(FIXTURE_DISPLAY_NAME)
            .map_err(|err| Error::internal(format!("invalid fixture display name: {err}")))?;
        let user = User::new(user_id.clone(), display_name);

        self.user_repository
            .upsert(&user)
            .await
            .map_err(Error::from)
    }
}

fn fixture_user_id() -> Result<UserId, Error> {
    UserId::new(FIXTURE_USER_ID)
        .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))
}

#[async_trait]
impl LoginService for DieselLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        if credentials.username() != FIXTURE_USERNAME || credentials.password() != FIXTURE_PASSWORD
        {
            return Err(Error::unauthorized("invalid credentials"));
        }

        let user_id = fixture_user_id()?;
        self.ensure_fixture_user_exists(&user_id).await?;
        Ok(user_id)
    }
}
