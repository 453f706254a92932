use thiserror::Error;

/// Errors raised when resolving a page image path.
///
/// Listing operations never fail; unreadable directories just come back
/// empty. Only [`crate::Library::page_path`], which hands a filesystem path
/// to callers, reports what went wrong.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A category, title, or page name that could escape the library root.
    #[error("invalid path component: {name:?}")]
    InvalidComponent { name: String },

    /// The requested page is not one of the supported image formats.
    #[error("unsupported page format: {name:?}")]
    UnsupportedExtension { name: String },

    /// The page does not exist under the library root.
    #[error("page not found: {category}/{title}/{page}")]
    PageNotFound {
        category: String,
        title: String,
        page: String,
    },
}
