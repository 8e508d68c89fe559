use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use rand::rngs::OsRng;

use crate::error::SetupError;

/// Argon2id with the crate's default cost parameters (19 MiB, 2 passes, 1 lane).
pub fn password_hasher() -> Argon2<'static> {
    Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default())
}

/// Hash `password` with a fresh random salt into a PHC string.
pub fn hash_password(password: &str) -> Result<String, SetupError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = password_hasher().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(stored: &str, candidate: &str) -> Result<bool, SetupError> {
    let parsed = PasswordHash::new(stored)?;
    Ok(password_hasher()
        .verify_password(candidate.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_and_is_salted() {
        let first = hash_password("correct horse").unwrap();
        let second = hash_password("correct horse").unwrap();

        assert!(first.starts_with("$argon2id$"));
        assert_ne!(first, second);
        assert!(verify_password(&first, "correct horse").unwrap());
        assert!(!verify_password(&first, "wrong horse").unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(matches!(
            verify_password("not-a-phc-string", "whatever"),
            Err(SetupError::PasswordHash(_))
        ));
    }
}
