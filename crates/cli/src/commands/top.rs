use anyhow::Result;
use komikyo_storage::Storage;
use std::path::PathBuf;

use crate::{ensure_db_dir, get_db_path};

pub(crate) fn run(limit: usize, db: Option<PathBuf>) -> Result<()> {
    let db_path = get_db_path(db);
    ensure_db_dir(&db_path)?;
    let storage = Storage::new(&db_path)?;
    let top = storage.top_comics(limit)?;
    println!("{}", serde_json::to_string_pretty(&top)?);
    Ok(())
}
