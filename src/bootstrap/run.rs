//! Wiring: config → cleaner → use case → watcher loop.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tt_platform::WatchSummary;

use super::cli::Cli;
use super::config::load_config;
use super::tracing::init_tracing_subscriber;

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// `--check`: the config is valid.
    Checked { replacers: usize },
    /// The watcher loop was stopped.
    Watched(WatchSummary),
}

/// Entry point used by `main`.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    match execute(&cli) {
        Ok(RunOutcome::Checked { replacers }) => {
            println!("Config OK: {replacers} replacer(s)");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Watched(_)) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the program described by `cli` until the watcher stops.
pub fn execute(cli: &Cli) -> anyhow::Result<RunOutcome> {
    let config_path = cli.config_path()?;
    let mut config = load_config(&config_path)?;

    if let Err(err) = init_tracing_subscriber(&config.log) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let cleaner = config.take_cleaner();
    info!(
        config = %config_path.display(),
        replacers = cleaner.len(),
        "configuration loaded"
    );

    if cli.check {
        return Ok(RunOutcome::Checked {
            replacers: cleaner.len(),
        });
    }

    watch(cleaner, &config).map(RunOutcome::Watched)
}

#[cfg(windows)]
fn watch(cleaner: tt_core::TextCleaner, config: &tt_core::AppConfig) -> anyhow::Result<WatchSummary> {
    use tt_app::{CleanClipboardOnChange, WriteRetryPolicy};
    use tt_platform::watcher::install_console_stop;
    use tt_platform::{ClipboardWatcher, SystemClipboard};

    let watcher = ClipboardWatcher::register().inspect_err(|err| {
        error!(error = %err, "clipboard watcher registration failed");
    })?;

    if !install_console_stop(watcher.stop_handle()) {
        info!("console stop unavailable, watcher ends with the process");
    }

    let retry = WriteRetryPolicy::from(&config.clipboard);
    let mut use_case =
        CleanClipboardOnChange::new(SystemClipboard::new(), cleaner).with_retry_policy(retry);

    info!(?retry, "Start...");
    let summary = watcher.run(&mut use_case);
    info!(
        notifications = summary.notifications,
        spurious = summary.spurious,
        "watcher finished"
    );

    Ok(summary)
}

#[cfg(not(windows))]
fn watch(_cleaner: tt_core::TextCleaner, _config: &tt_core::AppConfig) -> anyhow::Result<WatchSummary> {
    error!("clipboard watching requires Windows");
    Err(tt_core::ports::WatcherError::Unsupported.into())
}
