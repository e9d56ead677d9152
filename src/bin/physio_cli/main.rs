// ABOUTME: Physio CLI - what-if calculator over the persisted sandbox document
// ABOUTME: One-shot commands or an interactive shell sharing a single session and its undo history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Print the full report as JSON
//! physio-cli show
//!
//! # Edit a field (comma or period decimal separator)
//! physio-cli set weight_kg 82,5
//!
//! # Apply a lifestyle scenario
//! physio-cli scenario Aktiv
//!
//! # Switch lipids to mmol/L
//! physio-cli units lipids mmol
//!
//! # Exchange documents
//! physio-cli export ./sandbox.json
//! physio-cli import ./sandbox.json
//!
//! # Interactive session with undo/redo across commands
//! physio-cli shell
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use physio_core::models::{QuantityFamily, RecordField, UnitMode};
use physio_sandbox::config::SandboxConfig;
use physio_sandbox::session::Sandbox;
use physio_sandbox::storage::FileStorage;
use physio_sandbox::store::StateStore;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "physio-cli",
    about = "Physiology what-if sandbox",
    long_about = "Edit biometric inputs and inspect derived metrics, risk categories, sensitivity and A/B comparisons."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Storage directory override
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Line of the interactive shell
#[derive(Parser)]
#[command(no_binary_name = true, name = "physio")]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Print the full report as JSON
    Show,

    /// Set one field from raw text
    Set {
        /// Field name, e.g. `weight_kg`
        field: RecordField,

        /// Value, e.g. `82,5` or `female`
        value: String,
    },

    /// Apply a lifestyle scenario, or list scenarios when no name is given
    Scenario {
        /// Scenario name
        name: Option<String>,
    },

    /// Replace the record with the default profile
    Reset,

    /// Replace the record with the target profile
    Optimum,

    /// Step back one change
    Undo,

    /// Re-apply the last undone change
    Redo,

    /// Copy the current record into a snapshot slot
    Snapshot {
        /// Slot
        slot: SnapshotSlot,
    },

    /// Empty both snapshot slots
    ClearSnapshots,

    /// Switch the unit mode of a quantity family
    Units {
        /// `glucose` or `lipids`
        family: QuantityFamily,

        /// `mg` or `mmol`
        mode: UnitMode,
    },

    /// Write the export document to a file
    Export {
        /// Target path
        path: PathBuf,
    },

    /// Replace the state from an interchange document
    Import {
        /// Source path
        path: PathBuf,
    },

    /// Read commands from stdin against one live session
    Shell,
}

/// Snapshot slot
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum SnapshotSlot {
    /// Slot A
    A,
    /// Slot B
    B,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = SandboxConfig::from_env()?;
    if let Some(dir) = cli.storage_dir {
        config.storage_dir = dir;
    }
    let logging = if cli.verbose {
        config.logging.clone().verbose()
    } else {
        config.logging.clone()
    };
    logging.init()?;
    config.log_summary();

    let storage = FileStorage::new(config.storage_dir.clone());
    let store = StateStore::open(Box::new(storage), config.history_limit);
    let mut session = Sandbox::new(store, config.sensitivity);
    info!(
        backend = session.store().storage_backend(),
        "Session ready"
    );

    match cli.command {
        Command::Shell => commands::shell::run(&mut session).await?,
        command => commands::execute(&mut session, command).await?,
    }

    Ok(())
}
