use rusqlite::{params_from_iter, Connection};
use std::path::PathBuf;

/// Fixed table identifier; never interpolated from user input.
const USERS_TABLE: &str = "users";
const USERS_SCHEMA: &str = "name TEXT, email TEXT, profile_picture TEXT";

/// A stored user row in wire order: (name, email, profile_picture).
pub type UserRow = (String, String, Option<String>);

/// Columns that may appear in an exact-match filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Email,
}

impl UserField {
    pub const fn column(self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Email => "email",
        }
    }
}

/// Storage gateway for the single-table SQLite store.
///
/// Every operation opens its own connection and closes it on return — no
/// pooling, no shared handle across requests. Concurrent access is left to
/// SQLite's own file-level locking.
#[derive(Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> Result<Connection, rusqlite::Error> {
        Connection::open(&self.path)
    }

    /// Creates the users table if it does not exist. Idempotent; run once at
    /// startup before the server binds.
    pub fn ensure_table(&self) -> Result<(), rusqlite::Error> {
        let conn = self.open()?;
        conn.execute(
            &format!("CREATE TABLE IF NOT EXISTS {} ({})", USERS_TABLE, USERS_SCHEMA),
            [],
        )?;
        Ok(())
    }

    /// Runs a single SELECT combining all supplied exact-match filters with
    /// AND. Column identifiers come from the fixed [`UserField`] enum; values
    /// are bound parameters. Returns the matching rows in storage order.
    pub fn query_users(&self, filters: &[(UserField, String)]) -> Result<Vec<UserRow>, rusqlite::Error> {
        if filters.is_empty() {
            return Ok(Vec::new());
        }

        let clause = filters
            .iter()
            .enumerate()
            .map(|(i, (field, _))| format!("{} = ?{}", field.column(), i + 1))
            .collect::<Vec<_>>()
            .join(" AND ");

        let conn = self.open()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT name, email, profile_picture FROM {} WHERE {}",
            USERS_TABLE, clause
        ))?;
        let rows = stmt
            .query_map(params_from_iter(filters.iter().map(|(_, v)| v)), |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })?
            .collect::<Result<Vec<UserRow>, _>>()?;
        Ok(rows)
    }

    /// Appends one row, NULL for an absent profile picture. Autocommit.
    pub fn insert_user(
        &self,
        name: &str,
        email: &str,
        profile_picture: Option<&str>,
    ) -> Result<(), rusqlite::Error> {
        let conn = self.open()?;
        conn.execute(
            &format!(
                "INSERT INTO {} (name, email, profile_picture) VALUES (?1, ?2, ?3)",
                USERS_TABLE
            ),
            rusqlite::params![name, email, profile_picture],
        )?;
        Ok(())
    }
}
