//! User identity and credential types.

use std::fmt;

use uuid::Uuid;
use zeroize::Zeroizing;

/// Error returned when an identifier is not a valid UUID.
#[derive(Debug, thiserror::Error)]
#[error("invalid identifier: {0}")]
pub struct InvalidIdError(#[from] uuid::Error);

/// Validated user identifier (canonical UUID text).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
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

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when a display name fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DisplayNameError {
    /// The name is empty after trimming.
    #[error("display name must not be empty")]
    Empty,
    /// The name exceeds the storage limit.
    #[error("display name must be at most 64 characters")]
    TooLong,
}

/// Human-readable name shown for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    const MAX_LEN: usize = 64;

    /// Validate and normalise a display name.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DisplayNameError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DisplayNameError::Empty);
        }
        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(DisplayNameError::TooLong);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Application user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Stable user identifier.
    pub id: UserId,
    /// Display name shown in the client.
    pub display_name: DisplayName,
}

impl User {
    /// Assemble a user from already-validated parts.
    pub fn new(id: UserId, display_name: DisplayName) -> Self {
        Self { id, display_name }
    }

    /// Validate raw identifier and display-name strings into a user.
    pub fn try_from_strings(id: &str, display_name: &str) -> Result<Self, String> {
        let id = UserId::new(id).map_err(|err| err.to_string())?;
        let display_name = DisplayName::new(display_name).map_err(|err| err.to_string())?;
        Ok(Self::new(id, display_name))
    }
}

/// Error returned when login credentials fail shape validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,
    /// The password is empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated login credentials.
///
/// The password buffer is wiped when the value is dropped, and the type's
/// `Debug` output never includes it.
#[derive(Clone)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Validate raw username/password parts.
    ///
    /// The username is trimmed; the password is taken verbatim so passwords
    /// with significant whitespace keep working.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let trimmed = username.trim();
        if trimmed.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: trimmed.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// The validated username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The password as entered.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rstest_bdd_macros::{given, then, when};

    #[rstest]
    fn user_id_normalises_to_canonical_form() {
        let id = UserId::new("3FA85F64-5717-4562-B3FC-2C963F66AFA6").expect("valid uuid");
        assert_eq!(id.as_ref(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    }

    #[rstest]
    fn user_id_rejects_non_uuid_input() {
        assert!(UserId::new("not-a-uuid").is_err());
    }

    #[rstest]
    #[case("  ", DisplayNameError::Empty)]
    fn display_name_rejects_blank_input(#[case] raw: &str, #[case] expected: DisplayNameError) {
        assert_eq!(DisplayName::new(raw).expect_err("blank name"), expected);
    }

    #[rstest]
    fn display_name_rejects_oversized_input() {
        let raw = "x".repeat(65);
        assert_eq!(
            DisplayName::new(raw).expect_err("oversized name"),
            DisplayNameError::TooLong
        );
    }

    #[rstest]
    fn display_name_trims_surrounding_whitespace() {
        let name = DisplayName::new("  Kanora Admin  ").expect("valid name");
        assert_eq!(name.as_ref(), "Kanora Admin");
    }

    #[given("a username with surrounding whitespace")]
    fn whitespace_username() -> (&'static str, &'static str) {
        ("  admin  ", "password")
    }

    #[when("the credentials are validated")]
    fn validate(parts: (&str, &str)) -> Result<LoginCredentials, LoginValidationError> {
        LoginCredentials::try_from_parts(parts.0, parts.1)
    }

    #[then("the username is trimmed")]
    fn username_is_trimmed(result: Result<LoginCredentials, LoginValidationError>) {
        let credentials = result.expect("credentials should validate");
        assert_eq!(credentials.username(), "admin");
    }

    #[rstest]
    fn credentials_trim_the_username() {
        let parts = whitespace_username();
        let result = validate(parts);
        username_is_trimmed(result);
    }

    #[rstest]
    #[case("   ", "password", LoginValidationError::EmptyUsername)]
    #[case("admin", "", LoginValidationError::EmptyPassword)]
    fn credentials_reject_empty_parts(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        assert_eq!(
            LoginCredentials::try_from_parts(username, password).expect_err("invalid parts"),
            expected
        );
    }

    #[rstest]
    fn credentials_keep_password_whitespace() {
        let credentials =
            LoginCredentials::try_from_parts("admin", " spaced ").expect("valid parts");
        assert_eq!(credentials.password(), " spaced ");
    }

    #[rstest]
    fn debug_output_redacts_the_password() {
        let credentials = LoginCredentials::try_from_parts("admin", "secret").expect("valid");
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
