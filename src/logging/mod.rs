pub mod config;

use crate::cli::Args;
use crate::core::config::CONFIG_FILE_NAME;
use crate::logging::config::LogSettings;
use crate::Result;
use anyhow::{anyhow, Context};
use std::env;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Keeps the file sink flushing until the command returns.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize logging for the parsed command line.
///
/// Human-readable events go to stderr so stdout stays free for reports. When a log file
/// is configured, the same events are appended to it as JSON lines.
///
/// `RUST_LOG` wins over `--verbose`, which wins over `logging.level`.
pub fn init(args: &Args) -> Result<LoggingGuard> {
    if LOGGER_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(anyhow!("logging already initialized"));
    }

    let cwd = env::current_dir().ok();
    let config_file = resolve_config_file(args, cwd.as_deref());
    let settings = LogSettings::load(config_file.as_deref())?;
    let filter = env_filter(&settings, args.verbose);

    let (file_layer, file_guard) = match &settings.file {
        Some(path) => {
            let (writer, guard) = open_log_file(path)?;
            let layer = fmt::layer().json().with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(false)
                .with_target(false),
        )
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

fn env_filter(settings: &LogSettings, verbose: bool) -> EnvFilter {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        settings.level
    };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

fn resolve_config_file(args: &Args, cwd: Option<&Path>) -> Option<PathBuf> {
    match args.config_path() {
        Some(path) => Some(path.to_path_buf()),
        None => cwd.map(|root| root.join(CONFIG_FILE_NAME)),
    }
}

fn open_log_file(path: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    Ok(tracing_appender::non_blocking(file))
}
