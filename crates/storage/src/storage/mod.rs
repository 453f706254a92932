//! `SQLite` storage implementation for read statistics.

// SQLite uses i64 for counts/limits, Rust uses usize/u64 - safe conversions within DB context
#![allow(
    clippy::as_conversions,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "SQLite i64 <-> Rust usize conversions are safe within DB row counts"
)]

mod reads;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;

use komikyo_core::{env_parse_with_default, DEFAULT_DB_POOL_SIZE};

use crate::error::StorageError;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Read-statistics store over an `SQLite` connection pool.
///
/// Constructed once at process start with a configured database path and
/// shared by cloning; the pool is reference-counted.
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    pool.get().map_err(StorageError::Unavailable)
}

/// Log row read errors and filter them out
pub(crate) fn log_row_error<T>(result: rusqlite::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("Row read error: {}", e);
            None
        },
    }
}

/// Custom connection initializer for concurrency settings
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

fn db_pool_size() -> u32 {
    env_parse_with_default("KOMIKYO_DB_POOL_SIZE", DEFAULT_DB_POOL_SIZE)
}

impl Storage {
    /// Create a storage instance backed by the database file at `db_path`,
    /// creating the file if it does not exist.
    ///
    /// Runs schema migrations on the first connection. Safe to call
    /// repeatedly (and concurrently) on the same path; the schema is only
    /// created once.
    ///
    /// # Errors
    /// Returns [`StorageError::Unavailable`] if the database cannot be
    /// opened and [`StorageError::Database`] if a migration fails.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool =
            Pool::builder().max_size(pool_size).build(manager).map_err(StorageError::Unavailable)?;

        // Run migrations on first connection
        let conn = get_conn(&pool)?;
        migrations::run_migrations(&conn)?;
        drop(conn);

        tracing::info!(pool_size = pool_size, "Storage initialized with connection pool");

        Ok(Self { pool })
    }
}
