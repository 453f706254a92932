use anyhow::Result;
use komikyo_catalog::Library;
use std::path::PathBuf;

use crate::get_library_root;

/// Prints the category tree without touching the statistics store.
pub(crate) fn run(library: Option<PathBuf>) -> Result<()> {
    let root = get_library_root(library);
    let tree = Library::new(root).scan();
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}
