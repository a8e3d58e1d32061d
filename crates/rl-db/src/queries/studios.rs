//! Studio reference records. Placeholder table, not yet related to movies.

use rusqlite::Connection;
use rl_core::{Error, Result, StudioId};

use crate::models::Studio;

/// Create a studio. A missing name falls back to the schema default.
pub fn create_studio(conn: &Connection, name: Option<&str>) -> Result<Studio> {
    let studio = Studio {
        id: StudioId::new(),
        name: name.unwrap_or("NONE").to_string(),
    };

    conn.execute(
        "INSERT INTO studios (id, name) VALUES (?1, ?2)",
        rusqlite::params![studio.id.to_string(), studio.name],
    )
    .map_err(|e| Error::database(e.to_string()))?;

    Ok(studio)
}

/// Get a studio by ID.
pub fn get_studio(conn: &Connection, id: StudioId) -> Result<Option<Studio>> {
    let result = conn.query_row(
        "SELECT id, name FROM studios WHERE id = ?1",
        [id.to_string()],
        Studio::from_row,
    );
    match result {
        Ok(s) => Ok(Some(s)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List all studios ordered by name.
pub fn list_studios(conn: &Connection) -> Result<Vec<Studio>> {
    let mut stmt = conn
        .prepare("SELECT id, name FROM studios ORDER BY name ASC")
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], Studio::from_row)
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
    fn create_and_get() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let studio = create_studio(&conn, Some("A24")).unwrap();
        let found = get_studio(&conn, studio.id).unwrap().unwrap();
        assert_eq!(found.name, "A24");
    }

    #[test]
    fn missing_name_defaults() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let studio = create_studio(&conn, None).unwrap();
        assert_eq!(studio.name, "NONE");
    }

    #[test]
    fn list() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        create_studio(&conn, Some("Warner")).unwrap();
        create_studio(&conn, Some("A24")).unwrap();
        let studios = list_studios(&conn).unwrap();
        assert_eq!(studios.len(), 2);
        assert_eq!(studios[0].name, "A24");
    }
}
