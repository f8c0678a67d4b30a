//! Tracing configuration for vn-text-trim
//!
//! ## Behavior
//!
//! - **Development**: debug level, stderr
//! - **Production**: info level, stderr, plus a log file when `[log] directory` is set
//! - **Environment filter**: `RUST_LOG` wins, then `[log] level`, then the build default

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};
use tt_core::LogSettings;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "vn-text-trim.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// A configured level replaces the whole default set.
pub fn build_filter_directives(is_dev: bool, configured: Option<&str>) -> Vec<String> {
    if let Some(level) = configured.map(str::trim).filter(|level| !level.is_empty()) {
        return vec![level.to_string()];
    }

    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        if is_dev {
            "tt_platform=debug"
        } else {
            "tt_platform=info"
        }
        .to_string(),
        if is_dev { "tt_app=debug" } else { "tt_app=info" }.to_string(),
    ]
}

/// Initialize the tracing subscriber
///
/// Call once, after the config is loaded and before the watcher starts.
///
/// ## Errors
///
/// Returns `Err` if a subscriber is already registered. A log file that cannot
/// be created only disables file output.
pub fn init_tracing_subscriber(settings: &LogSettings) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development(), settings.level.as_deref());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let file_writer = match settings.directory.as_deref().map(build_file_writer) {
        Some(Ok(writer)) => Some(writer),
        Some(Err(err)) => {
            eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
            None
        }
        None => None,
    };

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stderr));

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(directory: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(directory)?;

    let file_appender = tracing_appender::rolling::never(directory, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
