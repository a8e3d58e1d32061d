//! Password hashing service.

use rl_core::{Error, Result};

/// One-way salted password hashing.
///
/// `hash` produces a self-describing digest string (algorithm, cost, and
/// random salt embedded), so `verify` needs no extra state.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password. Failures of the underlying primitive are
    /// unexpected and propagate as [`Error::Internal`].
    fn hash(&self, password: &str) -> Result<String>;

    /// Verify a plaintext password against a stored digest. A malformed
    /// digest verifies as `false`, never as an error.
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// bcrypt-backed hasher with a tunable work factor.
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Create a hasher with an explicit cost. Higher costs slow hashing
    /// (and brute-force attempts) exponentially.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| Error::internal(format!("bcrypt error: {e}")))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}
