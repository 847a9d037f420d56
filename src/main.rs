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

use chat_scroll_lock::config::{LockPolicy, Settings, SettingsStore};
use chat_scroll_lock::error::AppError;
use chat_scroll_lock::{Cli, Command};
use clap::Parser;
use std::fs::OpenOptions;
use std::time::Duration;

#[allow(clippy::exit)]
fn main() {
    if let Err(err) = run() {
        if let Some(app_error) = extract_app_error(&err) {
            eprintln!("{}", app_error.user_message());
            std::process::exit(app_error.exit_code());
        }
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    match cli.command.clone().unwrap_or_default() {
        Command::Demo { message_interval_ms } => run_demo(&cli, message_interval_ms),
        Command::Replay { script, restore_window_ms } => {
            let policy = restore_window_ms
                .map_or_else(LockPolicy::default, |ms| {
                    LockPolicy::with_restore_window(Duration::from_millis(ms))
                });
            let mut stdout = std::io::stdout().lock();
            chat_scroll_lock::replay::replay_file(&script, policy, !cli.disabled, &mut stdout)
        }
        Command::Enable => save_enabled(&cli, true),
        Command::Disable => save_enabled(&cli, false),
        Command::Status => {
            let store = SettingsStore::resolve(cli.config.as_deref())?;
            let settings = store.load()?;
            println!("settings: {}", store.path().display());
            println!("scroll lock: {}", if settings.enabled { "enabled" } else { "disabled" });
            Ok(())
        }
    }
}

fn run_demo(cli: &Cli, message_interval_ms: u64) -> anyhow::Result<()> {
    let store = SettingsStore::resolve(cli.config.as_deref())?;
    let settings = store.load()?;
    let enabled = settings.enabled && !cli.disabled;
    tracing::info!(enabled, message_interval_ms, "starting demo");

    let rt = tokio::runtime::Runtime::new()?;
    let mut app = chat_scroll_lock::app::create_app(
        store,
        enabled,
        Duration::from_millis(message_interval_ms.max(1)),
    );
    rt.block_on(chat_scroll_lock::app::run_tui(&mut app))
}

fn save_enabled(cli: &Cli, enabled: bool) -> anyhow::Result<()> {
    let store = SettingsStore::resolve(cli.config.as_deref())?;
    store.save(Settings { enabled })?;
    let state = if enabled { "enabled" } else { "disabled" };
    println!("scroll lock {state} ({})", store.path().display());
    Ok(())
}

fn extract_app_error(err: &anyhow::Error) -> Option<AppError> {
    err.chain().find_map(|cause| cause.downcast_ref::<AppError>().cloned())
}

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let Some(path) = cli.log_file.as_ref() else {
        if std::env::var_os("RUST_LOG").is_some() {
            eprintln!(
                "RUST_LOG is set, but tracing is disabled without --log-file <PATH>. \
Use --log-file to enable diagnostics."
            );
        }
        return Ok(());
    };

    let directives = cli
        .log_filter
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_owned());
    let filter = tracing_subscriber::EnvFilter::try_new(directives.as_str())
        .map_err(|e| anyhow::anyhow!("invalid tracing filter `{directives}`: {e}"))?;

    let mut options = OpenOptions::new();
    options.create(true).write(true);
    if cli.log_append {
        options.append(true);
    } else {
        options.truncate(true);
    }
    let file = options
        .open(path)
        .map_err(|e| anyhow::anyhow!("failed to open log file {}: {e}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))?;

    let command = cli.command.clone().unwrap_or_default();
    tracing::info!(
        target: "diagnostics",
        version = env!("CARGO_PKG_VERSION"),
        log_file = %path.display(),
        log_filter = %directives,
        log_append = cli.log_append,
        ?command,
        settings = ?cli.config,
        lock_disabled = cli.disabled,
        "tracing enabled"
    );

    Ok(())
}
