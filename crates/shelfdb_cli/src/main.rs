//! ShelfDB CLI
//!
//! Interactive manager for a personal book catalog. Presents a numbered
//! menu over stdin/stdout and persists every change to the catalog file.

mod shell;

use clap::Parser;
use shelfdb_core::{BookStore, Config};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Interactive book catalog manager.
#[derive(Parser)]
#[command(name = "shelfdb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the catalog file
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = Config::new();
    if let Some(path) = cli.path {
        config = config.path(path);
    }
    tracing::debug!(path = %config.path.display(), "opening catalog");

    let mut store = BookStore::open(config)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell::run(&mut store, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
