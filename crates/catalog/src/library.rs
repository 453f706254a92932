use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use komikyo_core::{ComicInfo, ComicSummary, IMAGE_EXTENSIONS, INFO_FILE};

use crate::error::CatalogError;

/// Category name mapped to its sorted title list.
pub type CatalogTree = BTreeMap<String, Vec<String>>;

/// Read-only view over the comic library on disk.
#[derive(Debug, Clone)]
pub struct Library {
    root: PathBuf,
}

impl Library {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walks the whole tree and returns every category with its titles.
    ///
    /// A missing library root is not an error; it yields an empty tree so a
    /// fresh install renders an empty catalog instead of failing. Plain files
    /// at either level are ignored, and categories without any title folders
    /// still appear with an empty list.
    pub fn scan(&self) -> CatalogTree {
        if !self.root.is_dir() {
            return CatalogTree::new();
        }
        list_dirs(&self.root)
            .into_iter()
            .map(|category| {
                let titles = self.titles(&category);
                (category, titles)
            })
            .collect()
    }

    /// Sorted title folders under one category.
    pub fn titles(&self, category: &str) -> Vec<String> {
        match checked_component(category) {
            Ok(_) => list_dirs(&self.root.join(category)),
            Err(_) => Vec::new(),
        }
    }

    /// Sorted page image names for one title.
    ///
    /// Only files with a supported image extension count as pages; anything
    /// else in the folder (`info.json` included) is skipped. A missing or
    /// unreadable title folder yields no pages.
    pub fn pages(&self, category: &str, title: &str) -> Vec<String> {
        let Some(dir) = self.title_dir(category, title) else {
            return Vec::new();
        };
        let mut pages: Vec<String> = read_names(&dir)
            .into_iter()
            .filter(|name| has_image_extension(name))
            .collect();
        pages.sort();
        pages
    }

    /// Metadata from the title's `info.json`, if present and well formed.
    ///
    /// A malformed file is logged and treated as absent so one bad edit
    /// cannot take a comic out of the catalog.
    pub fn info(&self, category: &str, title: &str) -> Option<ComicInfo> {
        let dir = self.title_dir(category, title)?;
        let path = dir.join(INFO_FILE);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to read info file");
                return None;
            }
        };
        match serde_json::from_str::<ComicInfo>(&raw) {
            Ok(info) => Some(info),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "malformed info file, ignoring");
                None
            }
        }
    }

    /// True when the title folder exists under the given category.
    pub fn contains(&self, category: &str, title: &str) -> bool {
        self.title_dir(category, title).is_some()
    }

    /// One catalog card for a title, or `None` when it has no pages.
    pub fn summary(&self, category: &str, title: &str) -> Option<ComicSummary> {
        let pages = self.pages(category, title);
        let cover = pages.first()?.clone();
        Some(ComicSummary {
            category: category.to_owned(),
            title: title.to_owned(),
            info: self.info(category, title),
            cover,
            page_count: pages.len(),
        })
    }

    /// Catalog cards for every title in a category, pageless titles skipped.
    pub fn summaries(&self, category: &str) -> Vec<ComicSummary> {
        self.titles(category)
            .iter()
            .filter_map(|title| self.summary(category, title))
            .collect()
    }

    /// Case-insensitive substring match over title folder names.
    ///
    /// Matches on the folder name, not the `info.json` title, so results are
    /// stable even when metadata is missing. An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<ComicSummary> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        let mut hits = Vec::new();
        for (category, titles) in self.scan() {
            for title in titles {
                if !title.to_lowercase().contains(&needle) {
                    continue;
                }
                if let Some(summary) = self.summary(&category, &title) {
                    hits.push(summary);
                }
            }
        }
        hits
    }

    /// Resolves a page image to its on-disk path.
    ///
    /// This is the only place a caller-supplied name turns into a filesystem
    /// path, so every component is checked against traversal and the page
    /// must carry a supported image extension and actually exist.
    pub fn page_path(
        &self,
        category: &str,
        title: &str,
        page: &str,
    ) -> Result<PathBuf, CatalogError> {
        checked_component(category)?;
        checked_component(title)?;
        checked_component(page)?;
        if !has_image_extension(page) {
            return Err(CatalogError::UnsupportedExtension {
                name: page.to_owned(),
            });
        }
        let path = self.root.join(category).join(title).join(page);
        if !path.is_file() {
            return Err(CatalogError::PageNotFound {
                category: category.to_owned(),
                title: title.to_owned(),
                page: page.to_owned(),
            });
        }
        Ok(path)
    }

    fn title_dir(&self, category: &str, title: &str) -> Option<PathBuf> {
        checked_component(category).ok()?;
        checked_component(title).ok()?;
        let dir = self.root.join(category).join(title);
        dir.is_dir().then_some(dir)
    }
}

/// Rejects names that are empty, dot-relative, or contain a path separator.
fn checked_component(name: &str) -> Result<(), CatalogError> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(CatalogError::InvalidComponent {
            name: name.to_owned(),
        });
    }
    Ok(())
}

fn has_image_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.iter().any(|known| *known == ext)
        })
}

/// Sorted subdirectory names, warning and yielding nothing on read failure.
fn list_dirs(path: &Path) -> Vec<String> {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %err, "failed to read directory");
            }
            return Vec::new();
        }
    };
    let mut dirs: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    dirs.sort();
    dirs
}

/// Plain file names in a directory, subfolders skipped.
fn read_names(path: &Path) -> Vec<String> {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %err, "failed to read directory");
            }
            return Vec::new();
        }
    };
    entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect()
}
