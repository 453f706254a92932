//! Comic domain types shared across crates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Per-title metadata read from `info.json` in the title folder.
///
/// These files are hand-written by library owners, so every field is
/// optional and `year` tolerates both string and number forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComicInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "year_as_string")]
    pub year: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ComicInfo {
    /// Display title: the metadata title when present, else the folder name.
    pub fn display_title<'a>(&'a self, folder: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(folder)
    }
}

/// Accept `"1986"`, `1986`, or `null` for the `year` field.
fn year_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "year must be a string or number, got {other}"
        ))),
    }
}

/// Catalog/search projection of one title: enough to render a grid card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComicSummary {
    pub category: String,
    /// Folder name, the stable identifier within the category.
    pub title: String,
    #[serde(default)]
    pub info: Option<ComicInfo>,
    /// First page filename, used as the cover thumbnail.
    pub cover: String,
    pub page_count: usize,
}

/// One leaderboard entry, ranked by view count.
///
/// Carries no category: same-named titles from different categories appear
/// as separate but indistinguishable entries. Kept that way for
/// compatibility with existing consumers; [`ReadCounter`] has the full key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopComic {
    pub title: String,
    pub views: u64,
}

/// One row of the read-counter table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadCounter {
    /// Surrogate rowid, not used as a key anywhere.
    pub id: i64,
    pub category: String,
    pub title: String,
    pub views: u64,
    pub last_read: DateTime<Utc>,
}
