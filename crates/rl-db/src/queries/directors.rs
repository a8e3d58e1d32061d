//! Director reference records. Placeholder table, not yet related to movies.

use rusqlite::Connection;
use rl_core::{DirectorId, Error, Result};

use crate::models::Director;

/// Create a director.
pub fn create_director(conn: &Connection, name: &str) -> Result<Director> {
    let director = Director {
        id: DirectorId::new(),
        name: name.to_string(),
    };

    conn.execute(
        "INSERT INTO directors (id, name) VALUES (?1, ?2)",
        rusqlite::params![director.id.to_string(), director.name],
    )
    .map_err(|e| Error::database(e.to_string()))?;

    Ok(director)
}

/// Get a director by ID.
pub fn get_director(conn: &Connection, id: DirectorId) -> Result<Option<Director>> {
    let result = conn.query_row(
        "SELECT id, name FROM directors WHERE id = ?1",
        [id.to_string()],
        Director::from_row,
    );
    match result {
        Ok(d) => Ok(Some(d)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List all directors ordered by name.
pub fn list_directors(conn: &Connection) -> Result<Vec<Director>> {
    let mut stmt = conn
        .prepare("SELECT id, name FROM directors ORDER BY name ASC")
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], Director::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::init_memory_pool;

    #[test]
    fn create_get_list() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let director = create_director(&conn, "Frank Darabont").unwrap();
        let found = get_director(&conn, director.id).unwrap().unwrap();
        assert_eq!(found.name, "Frank Darabont");

        create_director(&conn, "Sidney Lumet").unwrap();
        assert_eq!(list_directors(&conn).unwrap().len(), 2);
    }
}
