/**
 * Password Hashing
 *
 * bcrypt digests for stored passwords. Hashing and verification are CPU
 * bound, so the async helpers move the work onto the blocking pool.
 */

use thiserror::Error;

/// Failures of the hashing or signing primitives
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Hashes and verifies passwords with a fixed bcrypt cost
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password into a salted digest
    pub fn hash(&self, plain: &str) -> Result<String, CryptoError> {
        Ok(bcrypt::hash(plain, self.cost)?)
    }

    /// Check a plaintext password against a stored digest
    ///
    /// A mismatch is `false`. So is a digest bcrypt cannot parse; that case is
    /// logged since it means the stored record is damaged.
    pub fn verify(&self, digest: &str, plain: &str) -> bool {
        match bcrypt::verify(plain, digest) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Unreadable password digest: {}", e);
                false
            }
        }
    }

    /// `hash` on the blocking pool
    pub async fn hash_async(&self, plain: String) -> Result<String, CryptoError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&plain)).await?
    }

    /// `verify` on the blocking pool
    pub async fn verify_async(&self, digest: String, plain: String) -> Result<bool, CryptoError> {
        let hasher = *self;
        Ok(tokio::task::spawn_blocking(move || hasher.verify(&digest, &plain)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Lowest cost bcrypt accepts; keeps the tests fast.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new(TEST_COST);
        let digest = hasher.hash("secret").unwrap();
        assert_ne!(digest, "secret");
        assert!(hasher.verify(&digest, "secret"));
        assert!(!hasher.verify(&digest, "Secret"));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = PasswordHasher::new(TEST_COST);
        let first = hasher.hash("secret").unwrap();
        let second = hasher.hash("secret").unwrap();
        assert_ne!(first, second);
        assert!(hasher.verify(&first, "secret"));
        assert!(hasher.verify(&second, "secret"));
    }

    #[test]
    fn test_verify_garbage_digest_is_false() {
        let hasher = PasswordHasher::new(TEST_COST);
        assert!(!hasher.verify("not-a-bcrypt-digest", "secret"));
    }

    #[test]
    fn test_invalid_cost_is_an_error() {
        let hasher = PasswordHasher::new(2);
        assert!(matches!(hasher.hash("secret"), Err(CryptoError::Hash(_))));
    }

    #[tokio::test]
    async fn test_async_helpers() {
        let hasher = PasswordHasher::new(TEST_COST);
        let digest = hasher.hash_async("secret".to_string()).await.unwrap();
        assert!(hasher
            .verify_async(digest.clone(), "secret".to_string())
            .await
            .unwrap());
        assert!(!hasher
            .verify_async(digest, "wrong".to_string())
            .await
            .unwrap());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn prop_verify_accepts_only_the_original(plain in "[ -~]{1,40}", other in "[ -~]{1,40}") {
            let hasher = PasswordHasher::new(TEST_COST);
            let digest = hasher.hash(&plain).unwrap();
            prop_assert!(hasher.verify(&digest, &plain));
            if other != plain {
                prop_assert!(!hasher.verify(&digest, &other));
            }
        }
    }
}
