//! Token secret generation and hashing.

use sha2::{Digest, Sha256};

/// ## Summary
/// Generates a new random token secret (64 lowercase hex characters).
#[must_use]
pub fn generate_secret() -> String {
    format!(
        "{}{}",
        uuid::Uuid::new_v4().simple(),
        uuid::Uuid::new_v4().simple()
    )
}

/// ## Summary
/// Returns the hex SHA-256 digest under which a secret is stored.
#[must_use]
pub fn hash_secret(secret: &str) -> String {
    hex::encode(Sha256::digest(secret.as_bytes()))
}
