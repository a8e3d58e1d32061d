//! User persistence operations.
//!
//! `insert_user` stages a fully-constructed record; callers that need
//! atomicity with other writes open a transaction on the connection and
//! commit it themselves. Username uniqueness is enforced solely by the
//! storage layer, never by an application-level pre-check.

use rusqlite::Connection;
use rl_core::{Error, Result, UserId};

use crate::models::User;

/// Stage a user row inside the caller's transaction scope.
///
/// A username collision surfaces as [`Error::Conflict`] from the staged
/// insert; the caller rolls back and re-prompts.
pub fn insert_user(conn: &Connection, user: &User) -> Result<()> {
    conn.execute(
        "INSERT INTO users (id, username, image_url, password_hash, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![
            user.id.to_string(),
            user.username,
            user.image_url,
            user.password_hash,
            user.created_at,
        ],
    )
    .map_err(|e| {
        if e.to_string().contains("UNIQUE constraint failed") {
            Error::conflict(format!("Username '{}' already exists", user.username))
        } else {
            Error::database(e.to_string())
        }
    })?;

    Ok(())
}

/// Get a user by exact username match.
pub fn get_user_by_username(conn: &Connection, username: &str) -> Result<Option<User>> {
    let result = conn.query_row(
        "SELECT id, username, image_url, password_hash, created_at
         FROM users WHERE username = ?1",
        [username],
        User::from_row,
    );
    match result {
        Ok(u) => Ok(Some(u)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Get a user by primary key.
pub fn get_user_by_id(conn: &Connection, id: UserId) -> Result<Option<User>> {
    let result = conn.query_row(
        "SELECT id, username, image_url, password_hash, created_at
         FROM users WHERE id = ?1",
        [id.to_string()],
        User::from_row,
    );
    match result {
        Ok(u) => Ok(Some(u)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List all users ordered by username.
pub fn list_users(conn: &Connection) -> Result<Vec<User>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, username, image_url, password_hash, created_at
             FROM users ORDER BY username ASC",
        )
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], User::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Update a user's profile image. Returns true if a row was updated.
pub fn update_image_url(conn: &Connection, id: UserId, image_url: &str) -> Result<bool> {
    let n = conn
        .execute(
            "UPDATE users SET image_url = ?1 WHERE id = ?2",
            rusqlite::params![image_url, id.to_string()],
        )
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}

/// Delete a user by ID. Returns true if a row was deleted. List entries
/// owned by the user are removed by the FK cascade.
pub fn delete_user(conn: &Connection, id: UserId) -> Result<bool> {
    let n = conn
        .execute("DELETE FROM users WHERE id = ?1", [id.to_string()])
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::init_memory_pool;

    fn sample_user(username: &str) -> User {
        User {
            id: UserId::new(),
            username: username.into(),
            image_url: "/static/images/default-pic.png".into(),
            password_hash: "$2b$04$notarealhash".into(),
            created_at: "2024-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn insert_and_get() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let user = sample_user("alice");
        insert_user(&conn, &user).unwrap();

        let found = get_user_by_username(&conn, "alice").unwrap().unwrap();
        assert_eq!(found, user);

        let by_id = get_user_by_id(&conn, user.id).unwrap().unwrap();
        assert_eq!(by_id.username, "alice");
    }

    #[test]
    fn get_unknown_username_is_none() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        assert!(get_user_by_username(&conn, "nobody").unwrap().is_none());
    }

    #[test]
    fn duplicate_username_is_conflict() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        insert_user(&conn, &sample_user("dup")).unwrap();
        let err = insert_user(&conn, &sample_user("dup")).unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[test]
    fn list_ordered_by_username() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        insert_user(&conn, &sample_user("carol")).unwrap();
        insert_user(&conn, &sample_user("alice")).unwrap();
        insert_user(&conn, &sample_user("bob")).unwrap();

        let users = list_users(&conn).unwrap();
        let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, ["alice", "bob", "carol"]);
    }

    #[test]
    fn update_image() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let user = sample_user("pic");
        insert_user(&conn, &user).unwrap();
        assert!(update_image_url(&conn, user.id, "/img/new.png").unwrap());

        let found = get_user_by_id(&conn, user.id).unwrap().unwrap();
        assert_eq!(found.image_url, "/img/new.png");
    }

    #[test]
    fn delete() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let user = sample_user("gone");
        insert_user(&conn, &user).unwrap();
        assert!(delete_user(&conn, user.id).unwrap());
        assert!(get_user_by_id(&conn, user.id).unwrap().is_none());
        assert!(!delete_user(&conn, user.id).unwrap());
    }
}
