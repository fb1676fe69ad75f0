//! Logging bootstrap shared by library consumers and the CLI probe.
//!
//! # Responsibility
//! - Initialize the `log` facade exactly once per process.
//! - Offer a stderr sink for interactive use and a size-rotated file sink
//!   for embedded use.
//!
//! # Invariants
//! - Initialization is idempotent for an identical configuration.
//! - Conflicting re-initialization is rejected, never silently applied.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

const LOG_FILE_BASENAME: &str = "gcn_circulars";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

/// Destination for initialized log records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Line-per-record output on standard error.
    Stderr,
    /// Size-rotated files under the given directory.
    File(PathBuf),
}

impl Display for LogSink {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stderr => write!(f, "stderr"),
            Self::File(dir) => write!(f, "file:{}", dir.display()),
        }
    }
}

struct LoggingState {
    level: &'static str,
    sink: LogSink,
    _logger: LoggerHandle,
}

/// Initializes process-wide logging at the given level and sink.
///
/// Repeated calls with the same configuration are no-ops; a call with a
/// different level or sink fails with a human-readable error.
///
/// # Errors
/// - Returns an error when `level` is unsupported.
/// - Returns an error when the file sink directory cannot be created or
///   the logger backend fails to start.
/// - Returns an error when logging was already initialized differently.
pub fn init_logging(level: &str, sink: LogSink) -> Result<(), String> {
    let level = normalize_level(level)?;
    let requested_sink = sink.clone();

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(level, sink))?;

    if state.level != level || state.sink != requested_sink {
        return Err(format!(
            "logging already initialized as `{} {}`; refusing to switch to `{} {}`",
            state.level, state.sink, level, requested_sink
        ));
    }
    Ok(())
}

/// Returns `(level, sink)` when logging is active, `None` otherwise.
pub fn logging_status() -> Option<(&'static str, LogSink)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.sink.clone()))
}

/// Returns the default log level for the current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(level: &'static str, sink: LogSink) -> Result<LoggingState, String> {
    let builder =
        Logger::try_with_str(level).map_err(|err| format!("invalid log level `{level}`: {err}"))?;

    let logger = match &sink {
        LogSink::Stderr => builder
            .start()
            .map_err(|err| format!("failed to start stderr logger: {err}"))?,
        LogSink::File(dir) => {
            std::fs::create_dir_all(dir).map_err(|err| {
                format!("failed to create log directory `{}`: {err}", dir.display())
            })?;
            builder
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
                .map_err(|err| format!("failed to start file logger: {err}"))?
        }
    };

    info!(
        "event=logging_init module=core status=ok level={} sink={} version={}",
        level,
        sink,
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        level,
        sink,
        _logger: logger,
    })
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::{default_log_level, init_logging, logging_status, normalize_level, LogSink};

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warning ").unwrap(), "warn");
        assert!(normalize_level("loud").is_err());
    }

    #[test]
    fn default_log_level_matches_build_mode() {
        let level = default_log_level();
        assert!(level == "debug" || level == "info");
    }

    #[test]
    fn init_logging_is_idempotent_and_rejects_conflicts() {
        let log_dir = tempfile::tempdir().expect("temp dir should be created");
        let sink = LogSink::File(log_dir.path().to_path_buf());

        init_logging("info", sink.clone()).expect("first init should succeed");
        init_logging("info", sink.clone()).expect("same config should be idempotent");

        let level_error =
            init_logging("debug", sink.clone()).expect_err("level conflict should fail");
        assert!(level_error.contains("refusing to switch"));

        let sink_error =
            init_logging("info", LogSink::Stderr).expect_err("sink conflict should fail");
        assert!(sink_error.contains("refusing to switch"));

        let (active_level, active_sink) = logging_status().expect("logging should be active");
        assert_eq!(active_level, "info");
        assert_eq!(active_sink, sink);
    }
}
