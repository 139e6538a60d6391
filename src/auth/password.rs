use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

/// Argon2 digest of `plain` with a fresh random salt per call. The salt is
/// embedded in the returned PHC string.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let digest = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(digest)
}

/// Recomputes with the digest's own parameters and compares. The argon2
/// verifier compares in constant time.
pub fn verify_password(plain: &str, digest: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(digest).map_err(|e| {
        error!(error = %e, "stored digest is not a valid argon2 hash");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let password = "admin123";
        let digest = hash_password(password).expect("hashing should succeed");
        assert!(verify_password(password, &digest).expect("verify should succeed"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let digest = hash_password("correct-horse-battery-staple").expect("hashing should succeed");
        assert!(!verify_password("wrong-password", &digest).expect("verify should not error"));
    }

    #[test]
    fn same_password_hashes_to_distinct_digests() {
        let a = hash_password("repetido").expect("first digest");
        let b = hash_password("repetido").expect("second digest");
        assert_ne!(a, b);
        assert!(verify_password("repetido", &a).expect("verify a"));
        assert!(verify_password("repetido", &b).expect("verify b"));
    }

    #[test]
    fn verify_errors_on_malformed_digest() {
        assert!(verify_password("anything", "not-a-valid-hash").is_err());
    }
}
