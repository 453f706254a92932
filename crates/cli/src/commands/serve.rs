use anyhow::Result;
use komikyo_catalog::Library;
use komikyo_http::{create_router, AppState};
use komikyo_storage::Storage;
use std::path::PathBuf;
use std::sync::Arc;

use crate::{ensure_db_dir, get_db_path, get_library_root};

pub(crate) async fn run(
    port: u16,
    host: String,
    db: Option<PathBuf>,
    library: Option<PathBuf>,
) -> Result<()> {
    let db_path = get_db_path(db);
    ensure_db_dir(&db_path)?;
    let storage = Arc::new(Storage::new(&db_path)?);

    let root = get_library_root(library);
    if !root.is_dir() {
        tracing::warn!(root = %root.display(), "library root not found, catalog will be empty");
    }
    let library = Arc::new(Library::new(root));

    let state = Arc::new(AppState { storage, library });
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
