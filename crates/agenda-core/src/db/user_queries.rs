//! User listing and credential checking.

use rusqlite::named_params;

use crate::{
    error::{DatabaseResultExt, Result},
    models::User,
};

const SELECT_USERS_SQL: &str = "SELECT id, username, password FROM users";
const CHECK_CREDENTIALS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM users WHERE username = :username AND password = :password)";
const INSERT_USER_SQL: &str = "INSERT INTO users (username, password) VALUES (:username, :password)";

impl super::Database {
    fn user_from_row(row: &rusqlite::Row) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get::<_, i64>(0)? as u64,
            username: row.get(1)?,
            password: row.get(2)?,
        })
    }

    /// Lists every user in result-set order.
    pub fn list_users(&self) -> Result<Vec<User>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_USERS_SQL)
            .db_context("Failed to prepare user query")?;

        let users = stmt
            .query_map([], Self::user_from_row)
            .db_context("Failed to query users")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch users")?;

        Ok(users)
    }

    /// Returns true iff a stored user matches both fields exactly.
    ///
    /// Comparison is plain case-sensitive string equality; a mismatch in
    /// either field (including case) yields false.
    pub fn check_credentials(&self, username: &str, password: &str) -> Result<bool> {
        self.connection
            .query_row(
                CHECK_CREDENTIALS_SQL,
                named_params! {
                    ":username": username,
                    ":password": password,
                },
                |row| row.get(0),
            )
            .db_context("Failed to check credentials")
    }

    /// Creates a new user.
    pub fn create_user(&mut self, username: &str, password: &str) -> Result<User> {
        self.connection
            .execute(
                INSERT_USER_SQL,
                named_params! {
                    ":username": username,
                    ":password": password,
                },
            )
            .db_context("Failed to insert user")?;

        let id = self.connection.last_insert_rowid() as u64;

        Ok(User {
            id,
            username: username.into(),
            password: password.into(),
        })
    }
}
