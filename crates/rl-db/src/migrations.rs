//! Embedded SQL migrations and runner.
//!
//! Migrations are stored as `&str` constants and executed in order.  A
//! `schema_migrations` table tracks which versions have been applied.

use rusqlite::Connection;
use rl_core::{Error, Result};

/// V1: users, movies, and the user-to-movie favorite list.
///
/// `lists.movie_id` is UNIQUE at the table level: a movie can sit on at
/// most one user's list system-wide.
const V1_INITIAL: &str = r#"
CREATE TABLE users (
    id            TEXT PRIMARY KEY,
    username      TEXT UNIQUE NOT NULL,
    image_url     TEXT NOT NULL DEFAULT '/static/images/default-pic.png',
    password_hash TEXT NOT NULL,
    created_at    TEXT NOT NULL
);

-- Movies carry no attributes; full movie data lives in an external catalog
-- keyed by this short identifier.
CREATE TABLE movies (
    id TEXT PRIMARY KEY CHECK (length(id) <= 15)
);

CREATE TABLE lists (
    id         TEXT PRIMARY KEY,
    user_id    TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    movie_id   TEXT NOT NULL UNIQUE REFERENCES movies(id) ON DELETE CASCADE,
    created_at TEXT NOT NULL
);

CREATE INDEX idx_lists_user ON lists(user_id);
"#;

/// V2: reference tables for future schema growth. Not yet related to
/// movies or to each other.
const V2_REFERENCE_TABLES: &str = r#"
CREATE TABLE studios (
    id   TEXT PRIMARY KEY,
    name TEXT NOT NULL DEFAULT 'NONE'
);

CREATE TABLE actors (
    id   TEXT PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE directors (
    id   TEXT PRIMARY KEY,
    name TEXT NOT NULL
);
"#;

const MIGRATIONS: &[(i64, &str)] = &[(1, V1_INITIAL), (2, V2_REFERENCE_TABLES)];

/// Run all pending migrations on `conn`.
///
/// Creates the `schema_migrations` tracking table if it does not exist,
/// then applies each outstanding migration inside a transaction.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
    )
    .map_err(|e| Error::database(format!("Failed to create schema_migrations: {e}")))?;

    for &(version, sql) in MIGRATIONS {
        let already: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM schema_migrations WHERE version = ?1",
                [version],
                |row| row.get(0),
            )
            .map_err(|e| Error::database(e.to_string()))?;

        if already {
            continue;
        }

        let tx = conn
            .unchecked_transaction()
            .map_err(|e| Error::database(e.to_string()))?;

        tx.execute_batch(sql)
            .map_err(|e| Error::database(format!("Migration V{version} failed: {e}")))?;

        tx.execute(
            "INSERT INTO schema_migrations (version) VALUES (?1)",
            [version],
        )
        .map_err(|e| Error::database(e.to_string()))?;

        tx.commit().map_err(|e| Error::database(e.to_string()))?;

        tracing::debug!("applied migration V{version}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        // second call is a no-op
        run_migrations(&conn).unwrap();
    }

    #[test]
    fn all_tables_created() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        run_migrations(&conn).unwrap();

        let tables = [
            "users",
            "movies",
            "lists",
            "studios",
            "actors",
            "directors",
            "schema_migrations",
        ];
        for t in &tables {
            let exists: bool = conn
                .query_row(
                    "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name=?1",
                    [t],
                    |row| row.get(0),
                )
                .unwrap();
            assert!(exists, "table {t} should exist");
        }
    }

    #[test]
    fn movie_id_length_checked() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO movies (id) VALUES ('this-id-is-far-too-long')",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn image_url_column_default_applies() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        conn.execute(
            "INSERT INTO users (id, username, password_hash, created_at)
             VALUES ('u1', 'nopic', 'h', '2024-01-01T00:00:00Z')",
            [],
        )
        .unwrap();

        let image_url: String = conn
            .query_row("SELECT image_url FROM users WHERE id = 'u1'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(image_url, "/static/images/default-pic.png");
    }
}
