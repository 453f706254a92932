//! Storage layer for komikyo
//!
//! SQLite-backed read statistics: one counter row per (category, title)
//! pair, incremented with a single atomic upsert and queryable by rank.

mod error;
mod migrations;
mod storage;
#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use storage::Storage;
