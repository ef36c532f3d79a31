//! Password hashing helpers built on bcrypt.

use bcrypt::{hash, verify};

use crate::errors::DomainError;

/// Bcrypt cost factor
const COST: u32 = 10;

/// Hashes a plaintext password with a per-hash random salt
pub fn hash_password(plaintext: &str) -> Result<String, DomainError> {
    hash(plaintext, COST).map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
}

/// Compares a plaintext password against a stored digest
pub fn verify_password(plaintext: &str, digest: &str) -> Result<bool, DomainError> {
    verify(plaintext, digest)
        .map_err(|e| DomainError::internal(format!("Password verification failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let digest = hash_password("Passw0rd!").unwrap();
        assert!(verify_password("Passw0rd!", &digest).unwrap());
        assert!(!verify_password("wrong", &digest).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("Passw0rd!").unwrap();
        let b = hash_password("Passw0rd!").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_digest_is_internal_error() {
        assert!(verify_password("pw", "not-a-bcrypt-digest").is_err());
    }
}
