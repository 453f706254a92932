//! Read-event recording and ranked retrieval.

use chrono::{DateTime, Utc};
use komikyo_core::{ReadCounter, TopComic};
use rusqlite::params;

use super::{get_conn, log_row_error, Storage};
use crate::error::StorageError;

impl Storage {
    /// Record one read event for `(category, title)`.
    ///
    /// Creates the counter row with `views = 1` on the first read;
    /// afterwards bumps `views` by exactly one and refreshes `last_read`.
    /// The whole increment is a single upsert statement, so concurrent
    /// callers on the same pair cannot lose updates.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidKey`] for an empty `category` or
    /// `title` (checked before any storage access), and storage variants
    /// if the write cannot be committed.
    pub fn record_read(&self, category: &str, title: &str) -> Result<(), StorageError> {
        if category.is_empty() {
            return Err(StorageError::InvalidKey { field: "category" });
        }
        if title.is_empty() {
            return Err(StorageError::InvalidKey { field: "title" });
        }

        let conn = get_conn(&self.pool)?;
        let now = Utc::now().to_rfc3339();
        conn.execute(
            "INSERT INTO comic_reads (category, title, views, last_read)
               VALUES (?1, ?2, 1, ?3)
               ON CONFLICT(category, title)
               DO UPDATE SET views = views + 1, last_read = excluded.last_read",
            params![category, title, now],
        )?;
        Ok(())
    }

    /// Most-read comics: at most `limit` entries ordered by `views`
    /// descending. Ties break on `last_read` descending, then rowid
    /// ascending, so the ranking is stable across calls.
    ///
    /// A `limit` of zero or an empty table yields an empty vector, not an
    /// error. The projection is `{title, views}` only; see [`TopComic`] for
    /// how same-named titles across categories behave.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn top_comics(&self, limit: usize) -> Result<Vec<TopComic>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT title, views FROM comic_reads
               ORDER BY views DESC, last_read DESC, id ASC LIMIT ?1",
        )?;
        let results = stmt
            .query_map(params![limit], |row| {
                Ok(TopComic { title: row.get(0)?, views: row.get::<_, i64>(1)? as u64 })
            })?
            .filter_map(log_row_error)
            .collect();
        Ok(results)
    }

    /// Full counter rows including the category, ordered like
    /// [`Storage::top_comics`]. Backs tests and debugging; not part of the
    /// leaderboard wire shape.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn counters(&self) -> Result<Vec<ReadCounter>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT id, category, title, views, last_read FROM comic_reads
               ORDER BY views DESC, last_read DESC, id ASC",
        )?;
        let results = stmt.query_map([], row_to_counter)?.filter_map(log_row_error).collect();
        Ok(results)
    }
}

fn row_to_counter(row: &rusqlite::Row<'_>) -> rusqlite::Result<ReadCounter> {
    let last_read: String = row.get(4)?;
    let last_read = last_read.parse::<DateTime<Utc>>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(ReadCounter {
        id: row.get(0)?,
        category: row.get(1)?,
        title: row.get(2)?,
        views: row.get::<_, i64>(3)? as u64,
        last_read,
    })
}
