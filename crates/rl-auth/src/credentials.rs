//! Signup and authentication over a user repository.

use chrono::Utc;
use rusqlite::Connection;
use rl_core::config::AuthConfig;
use rl_core::{Result, UserId};
use rl_db::models::User;
use rl_db::queries::users;

use crate::hasher::{BcryptHasher, PasswordHasher};

/// Durable keyed user collection the credential manager depends on.
///
/// Callers own the transaction boundary: `insert` stages a row on the
/// given connection, and whoever opened the transaction commits or rolls
/// it back.
pub trait UserRepository {
    /// Find exactly one user by exact username match.
    fn find_by_username(&self, conn: &Connection, username: &str) -> Result<Option<User>>;

    /// Stage a user row inside the caller's transaction scope. A username
    /// collision surfaces as a conflict from the storage layer.
    fn insert(&self, conn: &Connection, user: &User) -> Result<()>;
}

/// Repository backed by the `users` table.
#[derive(Debug, Clone, Default)]
pub struct SqliteUserRepository;

impl UserRepository for SqliteUserRepository {
    fn find_by_username(&self, conn: &Connection, username: &str) -> Result<Option<User>> {
        users::get_user_by_username(conn, username)
    }

    fn insert(&self, conn: &Connection, user: &User) -> Result<()> {
        users::insert_user(conn, user)
    }
}

/// Gatekeeper for account creation and login.
///
/// Constructed with an explicit repository and hashing service rather than
/// reaching for process-wide globals, so tests can inject either.
pub struct CredentialManager<R = SqliteUserRepository, H = BcryptHasher> {
    repo: R,
    hasher: H,
    default_image_url: String,
}

impl CredentialManager {
    /// Build the production wiring from configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            SqliteUserRepository,
            BcryptHasher::new(config.bcrypt_cost),
            config.default_image_url.clone(),
        )
    }
}

impl<R: UserRepository, H: PasswordHasher> CredentialManager<R, H> {
    pub fn new(repo: R, hasher: H, default_image_url: impl Into<String>) -> Self {
        Self {
            repo,
            hasher,
            default_image_url: default_image_url.into(),
        }
    }

    /// Sign up a new user.
    ///
    /// Hashes the password with a fresh random salt, substitutes the
    /// configured placeholder image when `image_url` is empty, and stages
    /// the record on `conn`. The caller commits; a username collision
    /// surfaces as [`rl_core::Error::Conflict`] from the staged insert,
    /// with no application-level pre-check. Uniqueness is therefore
    /// enforced atomically by the storage layer even under concurrent
    /// signups.
    pub fn signup(
        &self,
        conn: &Connection,
        username: &str,
        image_url: &str,
        password: &str,
    ) -> Result<User> {
        let password_hash = self.hasher.hash(password)?;
        let image_url = if image_url.is_empty() {
            self.default_image_url.clone()
        } else {
            image_url.to_string()
        };

        let user = User {
            id: UserId::new(),
            username: username.to_string(),
            image_url,
            password_hash,
            created_at: Utc::now().to_rfc3339(),
        };

        self.repo.insert(conn, &user)?;
        tracing::debug!(username, "staged new user");

        Ok(user)
    }

    /// Verify a plaintext password for a named user.
    ///
    /// Returns `Ok(None)` for an unknown username (without attempting a
    /// hash comparison) and for a wrong password alike; the two causes are
    /// indistinguishable in the result so a caller cannot enumerate
    /// usernames from the outcome. Only storage or hashing faults are
    /// `Err`.
    pub fn authenticate(
        &self,
        conn: &Connection,
        username: &str,
        password: &str,
    ) -> Result<Option<User>> {
        let Some(user) = self.repo.find_by_username(conn, username)? else {
            return Ok(None);
        };

        if !self.hasher.verify(password, &user.password_hash) {
            tracing::debug!(username, "login rejected");
            return Ok(None);
        }

        Ok(Some(user))
    }
}
