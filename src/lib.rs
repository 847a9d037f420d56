// chat-scroll-lock - Keeps a chat panel where you scrolled it
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

pub mod app;
pub mod config;
pub mod error;
pub mod host;
pub mod lock;
pub mod replay;
pub mod ui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scroll-lock", about = "Keep a chat panel where you scrolled it")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with scroll lock off for this run without saving it
    #[arg(long, global = true)]
    pub disabled: bool,

    /// Write tracing diagnostics to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Tracing filter directives (falls back to RUST_LOG, then "info")
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long, global = true)]
    pub log_append: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive chat panel with a live message feed (default)
    Demo {
        /// Milliseconds between simulated chat lines
        #[arg(long, default_value_t = DEFAULT_MESSAGE_INTERVAL_MS)]
        message_interval_ms: u64,
    },
    /// Run a JSON-lines event script and print one state record per event
    Replay {
        script: PathBuf,

        /// Use the time-window strategy with this window instead of deferred writes
        #[arg(long, value_name = "MS")]
        restore_window_ms: Option<u64>,
    },
    /// Turn scroll lock on and save the setting
    Enable,
    /// Turn scroll lock off and save the setting
    Disable,
    /// Show the settings file location and current setting
    Status,
}

pub const DEFAULT_MESSAGE_INTERVAL_MS: u64 = 700;

impl Default for Command {
    fn default() -> Self {
        Self::Demo { message_interval_ms: DEFAULT_MESSAGE_INTERVAL_MS }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_demo() {
        let cli = Cli::try_parse_from(["scroll-lock"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
    }

    #[test]
    fn replay_accepts_window_and_global_flags() {
        let cli = Cli::try_parse_from([
            "scroll-lock",
            "replay",
            "events.jsonl",
            "--restore-window-ms",
            "100",
            "--disabled",
        ])
        .unwrap();
        assert!(cli.disabled);
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                script: PathBuf::from("events.jsonl"),
                restore_window_ms: Some(100),
            })
        );
    }
}
