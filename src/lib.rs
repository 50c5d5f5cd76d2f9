pub mod config;
pub mod error;
pub mod estimator;
pub mod form;
pub mod format;
pub mod request;

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging to stderr
///
/// `RUST_LOG` takes precedence over `level`. Can only be called once.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

/// Initialize tracing/logging to a file
///
/// Used by the interactive form, which owns the terminal. Events are written
/// by a background worker; keep the returned guard alive until exit so that
/// buffered lines are flushed.
pub fn init_file_tracing(level: &str, path: &Path) -> anyhow::Result<WorkerGuard> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Log file path has no file name: {}", path.display()))?;
    let directory = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_ansi(false).with_writer(writer))
        .try_init()?;

    Ok(guard)
}
