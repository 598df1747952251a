//! # dupereg CLI
//!
//! Command-line interface for the duplicate-file registry.
//!
//! ## Usage
//!
//! ```bash
//! dupereg --config ./config/dupereg.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `dupereg init` | Create the registry database and schema |
//! | `dupereg register <file>` | Register one file or report its existing copies |
//!
//! ## Examples
//!
//! ```bash
//! # Initialize the registry
//! dupereg init --config ./config/dupereg.toml
//!
//! # Register a file; prints "on <host> : <path>" per existing copy if the
//! # same content is already known
//! dupereg register ~/photos/holiday.jpg
//! ```

mod config;
mod digest;
mod extract;
mod migrate;
mod models;
mod register;
mod store;
mod validate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// dupereg — a content-addressed duplicate-file registry shared across
/// multiple hosts.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/dupereg.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "dupereg",
    about = "dupereg — a content-addressed duplicate-file registry shared across multiple hosts",
    version,
    long_about = "dupereg computes a SHA-256 digest of a single file, consults a shared registry \
    of previously seen files across machines, and either records the file as new or reports the \
    hosts and paths that already hold identical content."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/dupereg.toml`. Database and registry settings
    /// are read from this file.
    #[arg(long, global = true, default_value = "./config/dupereg.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Initialize the registry database schema.
    ///
    /// Creates the SQLite database file, the `files` table, and its indexes.
    /// This command is idempotent — running it multiple times is safe.
    Init,

    /// Register one file, or report the copies that already hold its content.
    ///
    /// Hashes the file, validates its metadata against the registry's
    /// admission rules, and looks its content identity up. Unseen content is
    /// recorded; known content is reported as `on <host> : <path>` per copy.
    /// Directories are not supported — one file per invocation.
    Register {
        /// Path of the file to register.
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Init => {
            migrate::run_migrations(&cfg).await?;
            println!("Registry initialized successfully.");
        }
        Commands::Register { file } => {
            register::run_register(&cfg, &file).await?;
        }
    }

    Ok(())
}
