//! Shared constants for komikyo.
//!
//! Centralizes values used by more than one crate.

/// Leaderboard size when the caller does not specify a limit.
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Maximum leaderboard size for any query (DoS protection).
pub const MAX_TOP_LIMIT: usize = 100;

/// File name of the optional per-title metadata document.
pub const INFO_FILE: &str = "info.json";

/// Page-image extensions recognized by the catalog scan (lowercase).
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Library root used when neither `--library` nor `KOMIKYO_LIBRARY` is set.
pub const DEFAULT_LIBRARY_DIR: &str = "Comics";

/// SQLite connection pool size used when `KOMIKYO_DB_POOL_SIZE` is not set.
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;
