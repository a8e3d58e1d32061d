//! Favorite-list operations.
//!
//! Each entry associates one user with one movie. The `movie_id` column is
//! UNIQUE at the table level, so a movie can sit on at most one user's list
//! system-wide; a second user favoriting the same movie gets a conflict.
//! Deleting the owning user or the referenced movie cascades onto the
//! entry.

use chrono::Utc;
use rusqlite::Connection;
use rl_core::{Error, ListEntryId, MovieId, Result, UserId};

use crate::models::{ListEntry, Movie};

const COLS: &str = "id, user_id, movie_id, created_at";

/// Add a movie to a user's list.
pub fn add_entry(conn: &Connection, user_id: UserId, movie_id: &MovieId) -> Result<ListEntry> {
    let entry = ListEntry {
        id: ListEntryId::new(),
        user_id,
        movie_id: movie_id.clone(),
        created_at: Utc::now().to_rfc3339(),
    };

    conn.execute(
        "INSERT INTO lists (id, user_id, movie_id, created_at) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![
            entry.id.to_string(),
            entry.user_id.to_string(),
            entry.movie_id.as_str(),
            entry.created_at,
        ],
    )
    .map_err(|e| {
        if e.to_string().contains("UNIQUE constraint failed") {
            Error::conflict(format!("Movie '{movie_id}' is already on a list"))
        } else {
            Error::database(e.to_string())
        }
    })?;

    Ok(entry)
}

/// Get the entry owned by a user, if any. Each user owns zero or one.
pub fn get_entry_for_user(conn: &Connection, user_id: UserId) -> Result<Option<ListEntry>> {
    let q = format!("SELECT {COLS} FROM lists WHERE user_id = ?1");
    let result = conn.query_row(&q, [user_id.to_string()], ListEntry::from_row);
    match result {
        Ok(e) => Ok(Some(e)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Get the entry referencing a movie, if any. The UNIQUE constraint
/// guarantees at most one.
pub fn get_entry_for_movie(conn: &Connection, movie_id: &MovieId) -> Result<Option<ListEntry>> {
    let q = format!("SELECT {COLS} FROM lists WHERE movie_id = ?1");
    let result = conn.query_row(&q, [movie_id.as_str()], ListEntry::from_row);
    match result {
        Ok(e) => Ok(Some(e)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Resolve the movie referenced by an entry.
pub fn get_entry_movie(conn: &Connection, entry: &ListEntry) -> Result<Movie> {
    let result = conn.query_row(
        "SELECT id FROM movies WHERE id = ?1",
        [entry.movie_id.as_str()],
        Movie::from_row,
    );
    match result {
        Ok(m) => Ok(m),
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            Err(Error::not_found("movie", &entry.movie_id))
        }
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Remove an entry. Returns true if a row was deleted.
pub fn remove_entry(conn: &Connection, id: ListEntryId) -> Result<bool> {
    let n = conn
        .execute("DELETE FROM lists WHERE id = ?1", [id.to_string()])
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}
