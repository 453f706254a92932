//! Filesystem catalog for komikyo.
//!
//! The library is a plain directory tree, `<root>/<category>/<title>/`, with
//! page images inside each title folder and an optional `info.json` next to
//! them. Nothing is cached: every query re-reads the filesystem, which keeps
//! the catalog consistent with whatever the user drops into the tree.

mod error;
mod library;


pub use error::CatalogError;
pub use library::{CatalogTree, Library};
