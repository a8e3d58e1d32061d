//! Actor reference records. Placeholder table, not yet related to movies.

use rusqlite::Connection;
use rl_core::{ActorId, Error, Result};

use crate::models::Actor;

/// Create an actor.
pub fn create_actor(conn: &Connection, name: &str) -> Result<Actor> {
    let actor = Actor {
        id: ActorId::new(),
        name: name.to_string(),
    };

    conn.execute(
        "INSERT INTO actors (id, name) VALUES (?1, ?2)",
        rusqlite::params![actor.id.to_string(), actor.name],
    )
    .map_err(|e| Error::database(e.to_string()))?;

    Ok(actor)
}

/// Get an actor by ID.
pub fn get_actor(conn: &Connection, id: ActorId) -> Result<Option<Actor>> {
    let result = conn.query_row(
        "SELECT id, name FROM actors WHERE id = ?1",
        [id.to_string()],
        Actor::from_row,
    );
    match result {
        Ok(a) => Ok(Some(a)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List all actors ordered by name.
pub fn list_actors(conn: &Connection) -> Result<Vec<Actor>> {
    let mut stmt = conn
        .prepare("SELECT id, name FROM actors ORDER BY name ASC")
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], Actor::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}
