use serde::Deserialize;
use thiserror::Error as ThisError;

use crate::db::NewAdmin;

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Submitted setup form. Missing fields deserialize as empty strings.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct SetupForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum ValidationError {
    #[error("Username and password are required.")]
    MissingCredentials,

    #[error("Username must be at least 3 characters.")]
    UsernameTooShort,

    #[error("Password must be at least 8 characters.")]
    PasswordTooShort,

    #[error("Passwords do not match.")]
    PasswordMismatch,
}

impl SetupForm {
    /// Check the fields in order and stop at the first failure.
    ///
    /// Only the username is trimmed. Lengths are counted in bytes.
    pub fn validate(&self) -> Result<NewAdmin, ValidationError> {
        let username = self.username.trim();
        let password = self.password.as_str();

        if username.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        if username.len() < MIN_USERNAME_LENGTH {
            return Err(ValidationError::UsernameTooShort);
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort);
        }
        if password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(NewAdmin {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}
