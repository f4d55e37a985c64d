use super::migrations::init_with_migrations;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "todolist.db";

/// Owner of the single SQLite connection used by the process.
///
/// Opening a `Db` applies every pending migration, so the schema is ready
/// before the first request is served. Nothing downstream creates tables.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (or creates) the database file at `path` and migrates it.
    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let path = path.as_ref();
        let mut conn = Connection::open(path)?;
        Self::configure(&conn)?;
        init_with_migrations(&mut conn)?;
        msg_debug!(Message::DatabaseOpened(path.display().to_string()));

        Ok(Db { conn })
    }

    /// Fresh private in-memory database, mostly useful in tests.
    pub fn in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        Self::configure(&conn)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens the database file without touching the schema.
    pub fn new_without_migrations(path: impl AsRef<Path>) -> Result<Connection> {
        let conn = Connection::open(path)?;
        Self::configure(&conn)?;
        Ok(conn)
    }

    fn configure(conn: &Connection) -> Result<()> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.busy_timeout(std::time::Duration::from_secs(5))?;
        Ok(())
    }
}
