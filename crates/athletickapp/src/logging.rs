//! Logging bootstrap.
//!
//! The library logs through the `log` facade only. Frontends call
//! [`init_logging`] once at startup to route those records somewhere:
//! rotating files when a log directory is configured, stderr otherwise.
//!
//! Initialisation is idempotent for identical arguments, rejects a second
//! call with different ones, and never panics.

use crate::error::{AthletickError, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "athletick";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: Option<PathBuf>,
    _logger: LoggerHandle,
}

/// Starts the process-wide logger.
///
/// # Errors
/// - `level` is not one of trace|debug|info|warn|error.
/// - `log_dir` cannot be created.
/// - Logging is already running with a different level or destination.
pub fn init_logging(level: &str, log_dir: Option<&Path>) -> Result<()> {
    let level = normalize_level(level)?;
    let log_dir = log_dir.map(Path::to_path_buf);

    let state = LOGGING_STATE.get_or_try_init(|| start(level, log_dir.clone()))?;
    if state.level != level || state.log_dir != log_dir {
        return Err(AthletickError::Logging(format!(
            "logging already initialized with level `{}`; refusing to reconfigure",
            state.level
        )));
    }
    Ok(())
}

/// `(level, log_dir)` of the running logger, `None` before initialisation.
pub fn logging_status() -> Option<(&'static str, Option<PathBuf>)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

fn start(level: &'static str, log_dir: Option<PathBuf>) -> Result<LoggingState> {
    let logger = Logger::try_with_str(level)
        .map_err(|err| AthletickError::Logging(format!("invalid log level `{level}`: {err}")))?;

    let logger = match &log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|err| {
                AthletickError::Logging(format!(
                    "failed to create log directory `{}`: {err}",
                    dir.display()
                ))
            })?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir.as_path())
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
                .start()
        }
        None => logger.log_to_stderr().start(),
    }
    .map_err(|err| AthletickError::Logging(format!("failed to start logger: {err}")))?;

    log::info!(
        "athletick {} logging at {level} to {}",
        env!("CARGO_PKG_VERSION"),
        log_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "stderr".to_string())
    );

    Ok(LoggingState {
        level,
        log_dir,
        _logger: logger,
    })
}

fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(AthletickError::Logging(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        ))),
    }
}
