//! `webshelf` binary: runs the server and offers read-only queries against
//! the same database.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use webshelf_core::{ENV_DB_PATH, Page};

#[derive(Parser)]
#[command(name = "webshelf")]
#[command(about = "Reading tracker for serialized fiction", long_about = None)]
struct Cli {
    /// Database file. Defaults to the per-user data directory.
    #[arg(long, global = true, env = ENV_DB_PATH)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        #[arg(short, long, default_value = "8080")]
        port: u16,
        /// Directory served at /static
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,
    },
    /// Print one page of books as JSON, most recently updated first
    List {
        #[arg(long, default_value = "1", value_parser = parse_page)]
        page: Page,
        /// Case-insensitive name substring
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Print the activity log as JSON, newest first
    History {
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn parse_page(raw: &str) -> Result<Page, String> {
    Page::parse(raw).map_err(|e| e.to_string())
}

pub(crate) fn default_db_path() -> PathBuf {
    dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join("webshelf").join("webshelf.db")
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db_path = cli.db.unwrap_or_else(default_db_path);

    match cli.command {
        Commands::Serve { host, port, static_dir } => {
            commands::serve::run(&db_path, host, port, static_dir).await?;
        },
        Commands::List { page, query } => commands::query::run_list(&db_path, page, query)?,
        Commands::History { limit } => commands::query::run_history(&db_path, limit)?,
    }

    Ok(())
}
