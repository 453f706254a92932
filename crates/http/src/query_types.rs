//! Request/query types (Deserialize)

use komikyo_core::{DEFAULT_TOP_LIMIT, MAX_TOP_LIMIT};
use serde::Deserialize;

const fn default_top_limit() -> usize {
    DEFAULT_TOP_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct TopQuery {
    #[serde(default = "default_top_limit")]
    pub limit: usize,
}

impl TopQuery {
    /// Cap limit to prevent unbounded leaderboard queries.
    pub fn capped_limit(&self) -> usize {
        self.limit.min(MAX_TOP_LIMIT)
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}
