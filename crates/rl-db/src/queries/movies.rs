//! Movie record operations.
//!
//! Movies are identity-only rows; full movie data lives in an external
//! catalog keyed by the short identifier.

use rusqlite::Connection;
use rl_core::{Error, MovieId, Result};

use crate::models::Movie;

/// Register an external movie identifier.
///
/// The identifier must be at most [`MovieId::MAX_LEN`] characters; the
/// bound is checked here so callers get a typed [`Error::Validation`]
/// instead of a raw constraint failure.
pub fn create_movie(conn: &Connection, id: &MovieId) -> Result<Movie> {
    if id.as_str().is_empty() {
        return Err(Error::validation("movie id must not be empty"));
    }
    if id.as_str().len() > MovieId::MAX_LEN {
        return Err(Error::validation(format!(
            "movie id '{id}' exceeds {} characters",
            MovieId::MAX_LEN
        )));
    }

    conn.execute("INSERT INTO movies (id) VALUES (?1)", [id.as_str()])
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                Error::conflict(format!("Movie '{id}' already exists"))
            } else {
                Error::database(e.to_string())
            }
        })?;

    Ok(Movie { id: id.clone() })
}

/// Get a movie by its external identifier.
pub fn get_movie(conn: &Connection, id: &MovieId) -> Result<Option<Movie>> {
    let result = conn.query_row(
        "SELECT id FROM movies WHERE id = ?1",
        [id.as_str()],
        Movie::from_row,
    );
    match result {
        Ok(m) => Ok(Some(m)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List all registered movies.
pub fn list_movies(conn: &Connection) -> Result<Vec<Movie>> {
    let mut stmt = conn
        .prepare("SELECT id FROM movies ORDER BY id ASC")
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], Movie::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Delete a movie. Returns true if a row was deleted. Any list entry
/// referencing the movie is removed by the FK cascade.
pub fn delete_movie(conn: &Connection, id: &MovieId) -> Result<bool> {
    let n = conn
        .execute("DELETE FROM movies WHERE id = ?1", [id.as_str()])
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::init_memory_pool;

    #[test]
    fn create_and_get() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let id = MovieId::from("tt0111161");
        create_movie(&conn, &id).unwrap();

        let found = get_movie(&conn, &id).unwrap().unwrap();
        assert_eq!(found.id, id);
    }

    #[test]
    fn id_too_long_is_validation_error() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let id = MovieId::from("this-id-is-far-too-long");
        let err = create_movie(&conn, &id).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn empty_id_is_validation_error() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let err = create_movie(&conn, &MovieId::from("")).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn duplicate_id_is_conflict() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let id = MovieId::from("tt0068646");
        create_movie(&conn, &id).unwrap();
        let err = create_movie(&conn, &id).unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[test]
    fn list_and_delete() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        create_movie(&conn, &MovieId::from("tt0000002")).unwrap();
        create_movie(&conn, &MovieId::from("tt0000001")).unwrap();
        assert_eq!(list_movies(&conn).unwrap().len(), 2);

        assert!(delete_movie(&conn, &MovieId::from("tt0000001")).unwrap());
        assert_eq!(list_movies(&conn).unwrap().len(), 1);
    }
}
