// ABOUTME: Interactive line-oriented shell for physio-cli
// ABOUTME: Parses each stdin line as a command against one live session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::execute;
use crate::helpers::display::{print_error, print_status};
use crate::ShellLine;
use clap::Parser;
use physio_core::errors::AppResult;
use physio_sandbox::session::Sandbox;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::debug;

/// Read commands until `exit`, `quit` or end of input
pub async fn run(session: &mut Sandbox) -> AppResult<()> {
    print_status("physio shell - type `help` for commands, `exit` to leave");
    let mut lines = BufReader::new(io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if matches!(line, "exit" | "quit") {
            break;
        }

        let parsed = match ShellLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed,
            Err(e) => {
                // clap renders help and usage errors itself
                print_error(&e.to_string());
                continue;
            }
        };

        if let Err(e) = execute(session, parsed.command).await {
            print_error(&e.to_string());
        }
    }

    debug!(
        history = session.store().history_len(),
        "Shell session ended"
    );
    Ok(())
}
