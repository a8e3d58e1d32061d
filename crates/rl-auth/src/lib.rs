//! rl-auth: account creation and login.
//!
//! The [`CredentialManager`] is the gatekeeper for signup and
//! authentication, isolating all password-hashing detail from the rest of
//! the system. Its hashing service and user repository are injected at
//! construction so either can be swapped out in tests.

pub mod credentials;
pub mod hasher;

pub use credentials::{CredentialManager, SqliteUserRepository, UserRepository};
pub use hasher::{BcryptHasher, PasswordHasher};
