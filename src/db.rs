use std::path::Path;

use rusqlite::Connection;

/// Opens the store selected by `db_url` and applies the schema.
/// `:memory:` gives a private in-memory store; anything else is a file path.
pub fn open(db_url: &str) -> Result<Connection, rusqlite::Error> {
    let conn = if db_url == ":memory:" {
        Connection::open_in_memory()?
    } else {
        if let Some(parent) = Path::new(db_url).parent() {
            std::fs::create_dir_all(parent).ok();
        }
        Connection::open(db_url)?
    };
    initialize(&conn)?;
    Ok(conn)
}

pub fn initialize(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch("PRAGMA journal_mode=WAL;").ok();

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS posts (
            id TEXT PRIMARY KEY,
            author TEXT NOT NULL,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            created TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_posts_created ON posts(created);
        ",
    )?;
    Ok(())
}
