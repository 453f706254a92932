//! Migration v1: read-counter table

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS comic_reads (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    category TEXT NOT NULL,
    title TEXT NOT NULL,
    views INTEGER NOT NULL DEFAULT 0,
    last_read TEXT NOT NULL,
    UNIQUE(category, title)
);

CREATE INDEX IF NOT EXISTS idx_comic_reads_views ON comic_reads(views DESC);
";
