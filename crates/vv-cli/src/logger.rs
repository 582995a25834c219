use crate::error::{CliError, Result as CliResult};

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, debug};
use vv_config::{Config, LogLevel};

/// Where log records go. Stdout is reserved for command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr { colored: bool },
    File(PathBuf),
}

impl LogTarget {
    pub fn from_config(config: &Config, config_dir: &Path) -> Self {
        match config.log_file_path(config_dir) {
            Some(path) => Self::File(path),
            None => Self::Stderr {
                colored: config.logging.colored,
            },
        }
    }
}

/// Installs the global fern logger. Call once, before any other logging.
pub fn initialize(level: LogLevel, target: LogTarget) -> CliResult<()> {
    let level_filter = LevelFilter::from(level);

    let output = match &target {
        LogTarget::File(path) => file_dispatch(path)?,
        LogTarget::Stderr { colored: true } => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{} - {}] {message}",
                        humantime::format_rfc3339_seconds(SystemTime::now()),
                        colors.color(record.level()),
                    ))
                })
                .chain(std::io::stderr())
        }
        LogTarget::Stderr { colored: false } => Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} - {}] {message}",
                    humantime::format_rfc3339_seconds(SystemTime::now()),
                    record.level(),
                ))
            })
            .chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(output)
        .apply()
        .map_err(|e| CliError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    debug!("Logger initialized: level={level}, target={target:?}");

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

/// Appends to `path`, creating its directory. File lines carry the source
/// location since there is no terminal to correlate with.
fn file_dispatch(path: &Path) -> CliResult<Dispatch> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::Logger {
            message: format!("Failed to create log directory {}: {e}", parent.display()),
        })?;
    }

    let file = fern::log_file(path).map_err(|e| CliError::Logger {
        message: format!("Failed to open log file {}: {e}", path.display()),
    })?;

    Ok(Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} - {}] {message} [{}:{}]",
                humantime::format_rfc3339(SystemTime::now()),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
            ))
        })
        .chain(file))
}
