use crate::{PortalError, PortalResult};

use std::fmt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use ep_config::LogLevel;
use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, debug};

/// Install the global logger.
///
/// Records go to `log_file` when one is configured, otherwise to stderr so
/// that stdout carries only command output. Colors apply to stderr only.
pub fn initialize(level: LogLevel, log_file: Option<PathBuf>, colored: bool) -> PortalResult<()> {
    let dispatch = Dispatch::new().level(level.0);

    let dispatch = match &log_file {
        Some(path) => dispatch.format(plain_record).chain(open_log_file(path)?),
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            dispatch
                .format(move |out, message, record| {
                    write_record(out, message, record, colors.color(record.level()))
                })
                .chain(std::io::stderr())
        }
        None => dispatch.format(plain_record).chain(std::io::stderr()),
    };

    dispatch
        .apply()
        .map_err(|e| PortalError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(path) => debug!("Logging at {:?} to {}", level.0, path.display()),
        None => debug!("Logging at {:?} to stderr", level.0),
    }
    Ok(())
}

fn open_log_file(path: &Path) -> PortalResult<File> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| {
            PortalError::logger(format!(
                "Failed to create log directory {}: {e}",
                dir.display()
            ))
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            PortalError::logger(format!("Failed to open log file {}: {e}", path.display()))
        })
}

fn plain_record(out: FormatCallback, message: &fmt::Arguments, record: &Record) {
    write_record(out, message, record, record.level());
}

/// `[<rfc3339> - LEVEL] message [file:line]`
fn write_record(
    out: FormatCallback,
    message: &fmt::Arguments,
    record: &Record,
    level: impl fmt::Display,
) {
    out.finish(format_args!(
        "[{} - {level}] {message} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ));
}
