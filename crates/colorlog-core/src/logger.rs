//! The dual-sink logger
//!
//! A [`Logger`] renders each record once, gates it once against the
//! configured threshold, and fans the result out to standard output
//! (colorized or plain) and, when configured, a plain-text file mirror.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{Local, SecondsFormat};

use crate::color::Color;
use crate::error::{LoggerError, LoggerResult};
use crate::level::Severity;

/// Leveled logger writing colorized records to stdout and, optionally,
/// plain records to a file.
///
/// The logger owns its file handle exclusively; emission takes `&mut self`
/// and there is no internal locking. Callers sharing a logger across
/// threads must add their own serialization.
#[derive(Debug)]
pub struct Logger {
    level: Severity,
    color: bool,
    sink: Option<BufWriter<File>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Severity::Info)
    }
}

impl Logger {
    /// Create a console-only, colorized logger
    pub fn new(level: Severity) -> Self {
        Self {
            level,
            color: true,
            sink: None,
        }
    }

    /// Create a console-only logger emitting plain text with the same layout
    pub fn colorless(level: Severity) -> Self {
        Self {
            level,
            color: false,
            sink: None,
        }
    }

    /// Create a logger that mirrors plain-format records to a file
    ///
    /// The file at `path` is created, truncating any existing content, and
    /// wrapped in a buffered writer. There is no console-only fallback: on
    /// failure no logger is produced.
    pub fn with_file(level: Severity, path: impl AsRef<Path>) -> LoggerResult<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| LoggerError::create_file(path, source))?;
        Ok(Self {
            level,
            color: true,
            sink: Some(BufWriter::new(file)),
        })
    }

    /// Create a logger configured from the environment
    ///
    /// Reads the threshold from `COLORLOG_LEVEL` (defaulting to `Info` when
    /// unset or unrecognized) and disables color when `NO_COLOR` is set.
    pub fn from_env() -> Self {
        let level = env::var("COLORLOG_LEVEL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Severity::Info);
        if env::var_os("NO_COLOR").is_some() {
            Self::colorless(level)
        } else {
            Self::new(level)
        }
    }

    /// Current threshold
    pub fn level(&self) -> Severity {
        self.level
    }

    /// Replace the threshold; applies from the next emission call
    pub fn set_level(&mut self, level: Severity) {
        self.level = level;
    }

    /// Log a debug message
    pub fn debug(&mut self, msg: &str) {
        self.emit(Severity::Debug, Color::Green, msg);
    }

    /// Log an info message
    pub fn info(&mut self, msg: &str) {
        self.emit(Severity::Info, Color::Grey, msg);
    }

    /// Log a warning message
    pub fn warn(&mut self, msg: &str) {
        self.emit(Severity::Warn, Color::Yellow, msg);
    }

    /// Log an error message
    pub fn error(&mut self, msg: &str) {
        self.emit(Severity::Error, Color::Red, msg);
    }

    /// Log a fatal message
    pub fn fatal(&mut self, msg: &str) {
        self.emit(Severity::Fatal, Color::Magenta, msg);
    }

    /// Write a pre-formatted message as a colorized console record
    pub fn print(&self, msg: &str, level: Severity, color: Color) {
        if self.enabled(level) {
            println!("{}", color_line(color, level, &timestamp(), msg));
        }
    }

    /// Append a colorized fragment to the console, no prefix and no newline
    ///
    /// Stdout is flushed so the fragment shows up before the line is
    /// completed by a later write.
    pub fn printc(&self, msg: &str, level: Severity, color: Color) {
        if self.enabled(level) {
            print!("\x1b[0;{}m{}\x1b[0m", color.code(), msg);
            let _ = io::stdout().flush();
        }
    }

    /// Write a plain-format record to the file sink only
    ///
    /// Flushed immediately. Silent no-op when no file sink is open.
    pub fn write(&mut self, msg: &str, level: Severity) {
        if self.enabled(level) {
            let timestamp = timestamp();
            self.append(level, &timestamp, msg);
        }
    }

    /// Flush and release the file sink
    ///
    /// Console-only and already-closed loggers are unaffected. Subsequent
    /// file writes are silent no-ops. Dropping the logger also flushes the
    /// sink, but errors surface nowhere at that point either.
    pub fn close(&mut self) {
        if let Some(mut sink) = self.sink.take() {
            let _ = sink.flush();
        }
    }

    /// Gate predicate: a `None` threshold suppresses everything
    fn enabled(&self, level: Severity) -> bool {
        self.level > Severity::None && level >= self.level
    }

    // Gate once, render once, then fan out to both sinks.
    fn emit(&mut self, level: Severity, color: Color, msg: &str) {
        if !self.enabled(level) {
            return;
        }
        let timestamp = timestamp();
        if self.color {
            println!("{}", color_line(color, level, &timestamp, msg));
        } else {
            println!("{}", plain_line(level, &timestamp, msg));
        }
        self.append(level, &timestamp, msg);
    }

    // Plain-format append to the file sink, flushed per record.
    fn append(&mut self, level: Severity, timestamp: &str, msg: &str) {
        if let Some(sink) = self.sink.as_mut() {
            let _ = writeln!(sink, "{}", plain_line(level, timestamp, msg));
            let _ = sink.flush();
        }
    }
}

fn timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}

fn plain_line(level: Severity, timestamp: &str, msg: &str) -> String {
    format!("[{}] <{}> {}", level, timestamp, msg)
}

fn color_line(color: Color, level: Severity, timestamp: &str, msg: &str) -> String {
    format!(
        "\x1b[0;{}m{}\x1b[0m",
        color.code(),
        plain_line(level, timestamp, msg)
    )
}

/// Convenience macros for printf-style logging
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatal(&format!($($arg)*))
    };
}
