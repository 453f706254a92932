//! Versioned schema migrations, guarded by the `user_version` pragma.

mod v1;

use rusqlite::Connection;

pub const SCHEMA_VERSION: i32 = 1;

/// Bring the database schema up to [`SCHEMA_VERSION`].
///
/// Safe to run repeatedly and from concurrent openers: the schema is
/// guarded by the `user_version` pragma and `IF NOT EXISTS` DDL, and the
/// busy timeout serializes racing writers.
pub fn run_migrations(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    conn.pragma_update(None, "busy_timeout", 5000i32)?;

    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::info!("Database schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    if current_version < 1i32 {
        tracing::info!("Running migration v1: comic_reads table");
        conn.execute_batch(v1::SQL)?;
    }

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tracing::info!("Database schema up to date (version {})", SCHEMA_VERSION);

    Ok(())
}
