//! Password hashing for stored user credentials. `UserService` hashes on
//! create and again whenever an update carries a new password; the plaintext
//! is never persisted or logged.

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

/// Hashes `plain` with Argon2id using the crate's fixed default cost and a
/// fresh random salt. Returns the PHC string.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::{PasswordHash, PasswordVerifier};

    #[test]
    fn hash_verifies_against_plaintext() {
        let hash = hash_password("123456").expect("hashing should succeed");
        let parsed = PasswordHash::new(&hash).expect("phc string");
        assert!(Argon2::default()
            .verify_password(b"123456", &parsed)
            .is_ok());
        assert!(Argon2::default()
            .verify_password(b"654321", &parsed)
            .is_err());
    }

    #[test]
    fn same_password_hashes_differently() {
        let a = hash_password("123456").expect("hash a");
        let b = hash_password("123456").expect("hash b");
        assert_ne!(a, b);
        assert!(!a.contains("123456"));
    }
}
