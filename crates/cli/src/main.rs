use anyhow::Result;
use clap::{Parser, Subcommand};
use komikyo_core::DEFAULT_LIBRARY_DIR;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "komikyo")]
#[command(about = "Local comic library reader with read statistics", long_about = None)]
struct Cli {
    /// Statistics database file (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "FILE")]
    db: Option<PathBuf>,

    /// Comic library root (defaults to ./Comics)
    #[arg(long, global = true, value_name = "DIR")]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server and web viewer
    Serve {
        #[arg(short, long, default_value = "8777")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print the most-read leaderboard as JSON
    Top {
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
    /// Record one read event for a comic
    Record { category: String, title: String },
    /// Print the scanned library tree as JSON
    Scan,
}

/// Database path resolution: `--db` flag, then `KOMIKYO_DB`, then the
/// platform-local data directory.
fn get_db_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("KOMIKYO_DB").map(PathBuf::from))
        .unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("komikyo")
                .join("stats.db")
        })
}

/// Library root resolution: `--library` flag, then `KOMIKYO_LIBRARY`, then
/// the `Comics` folder in the working directory.
fn get_library_root(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("KOMIKYO_LIBRARY").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LIBRARY_DIR))
}

fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => {
            commands::serve::run(port, host, cli.db, cli.library).await
        },
        Commands::Top { limit } => commands::top::run(limit, cli.db),
        Commands::Record { category, title } => commands::record::run(&category, &title, cli.db),
        Commands::Scan => commands::scan::run(cli.library),
    }
}
