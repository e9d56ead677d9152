// ABOUTME: Command dispatch for physio-cli
// ABOUTME: Maps parsed commands onto session and store operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod shell;

use crate::helpers::display::{print_report_json, print_scenarios, print_status, print_summary};
use crate::{Command, SnapshotSlot};
use physio_core::errors::{AppError, AppResult};
use physio_sandbox::logging::SandboxLogger;
use physio_sandbox::session::Sandbox;
use physio_sandbox::store::scenario_names;
use physio_sandbox::transfer::{export_file, import_file};
use std::time::Instant;

const fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Show => "show",
        Command::Set { .. } => "set",
        Command::Scenario { .. } => "scenario",
        Command::Reset => "reset",
        Command::Optimum => "optimum",
        Command::Undo => "undo",
        Command::Redo => "redo",
        Command::Snapshot { .. } => "snapshot",
        Command::ClearSnapshots => "clear-snapshots",
        Command::Units { .. } => "units",
        Command::Export { .. } => "export",
        Command::Import { .. } => "import",
        Command::Shell => "shell",
    }
}

/// Run one command against `session`
pub async fn execute(session: &mut Sandbox, command: Command) -> AppResult<()> {
    let name = command_name(&command);
    let started = Instant::now();
    let result = dispatch(session, command).await;
    let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    SandboxLogger::log_command(name, result.is_ok(), elapsed);
    result
}

async fn dispatch(session: &mut Sandbox, command: Command) -> AppResult<()> {
    match command {
        Command::Show => {
            let report = session.render();
            print_report_json(&report)?;
        }
        Command::Set { field, value } => {
            if !session.store_mut().set_input(field, &value) {
                SandboxLogger::log_rejected_command("set", "unparseable value");
                return Err(AppError::invalid_input(format!(
                    "'{value}' is not a valid value for {field}"
                )));
            }
            print_summary(&session.render());
        }
        Command::Scenario { name: None } => print_scenarios(&scenario_names()),
        Command::Scenario { name: Some(name) } => {
            session.store_mut().apply_scenario(&name)?;
            print_summary(&session.render());
        }
        Command::Reset => {
            session.store_mut().reset();
            print_summary(&session.render());
        }
        Command::Optimum => {
            session.store_mut().apply_optimum();
            print_summary(&session.render());
        }
        Command::Undo => {
            if session.store_mut().undo() {
                print_summary(&session.render());
            } else {
                print_status("Nothing to undo");
            }
        }
        Command::Redo => {
            if session.store_mut().redo() {
                print_summary(&session.render());
            } else {
                print_status("Nothing to redo");
            }
        }
        Command::Snapshot { slot: SnapshotSlot::A } => {
            session.store_mut().set_snapshot_a();
            print_status("Snapshot A saved");
        }
        Command::Snapshot { slot: SnapshotSlot::B } => {
            session.store_mut().set_snapshot_b();
            print_status("Snapshot B saved");
        }
        Command::ClearSnapshots => {
            session.store_mut().clear_snapshots();
            print_status("Snapshots cleared");
        }
        Command::Units { family, mode } => {
            if session.store_mut().convert_units(family, mode)? {
                print_summary(&session.render());
            } else {
                print_status(&format!("Already using {mode}"));
            }
        }
        Command::Export { path } => {
            export_file(session.store(), &path).await?;
            print_status(&format!("Exported to {}", path.display()));
        }
        Command::Import { path } => {
            import_file(session.store_mut(), &path).await?;
            print_summary(&session.render());
        }
        Command::Shell => {
            SandboxLogger::log_rejected_command("shell", "already in a shell");
            print_status("Already in a shell");
        }
    }
    Ok(())
}
