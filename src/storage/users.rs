//! Login user repository

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::DaycareResult;
use crate::models::{User, UserId};

pub struct UserRepository<'a> {
    conn: &'a Connection,
}

impl<'a> UserRepository<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Exact, case-sensitive lookup by username
    pub fn find(&self, username: &str) -> DaycareResult<Option<User>> {
        let user = self
            .conn
            .query_row(
                "SELECT id, username, password FROM users WHERE username = ?1",
                params![username],
                |row| {
                    Ok(User {
                        id: row.get(0)?,
                        username: row.get(1)?,
                        password: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(user)
    }

    pub fn insert(&self, username: &str, password: &str) -> DaycareResult<UserId> {
        self.conn.execute(
            "INSERT INTO users (username, password) VALUES (?1, ?2)",
            params![username, password],
        )?;
        Ok(UserId::new(self.conn.last_insert_rowid()))
    }
}
