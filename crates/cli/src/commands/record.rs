use anyhow::Result;
use komikyo_storage::Storage;
use std::path::PathBuf;

use crate::{ensure_db_dir, get_db_path};

pub(crate) fn run(category: &str, title: &str, db: Option<PathBuf>) -> Result<()> {
    let db_path = get_db_path(db);
    ensure_db_dir(&db_path)?;
    let storage = Storage::new(&db_path)?;
    storage.record_read(category, title)?;
    println!("Recorded read for {category}/{title}");
    Ok(())
}
