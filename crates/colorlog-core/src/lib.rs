//! ColorLog Core
//!
//! Leveled, colorized logging with an optional plain-text file mirror.
//! A [`Logger`] writes ANSI-colorized records to standard output and, when a
//! file sink is configured, appends the same records in plain form, flushed
//! per call.
//!
//! ```rust,ignore
//! use colorlog_core::{Logger, Severity};
//!
//! let mut log = Logger::with_file(Severity::Info, "app.log")?;
//! log.info("server listening");
//! colorlog_core::log_warn!(log, "retry {} of {}", attempt, max);
//! log.close();
//! ```

pub mod color;
pub mod error;
pub mod level;
pub mod logger;

// Re-export commonly used types
pub use color::Color;
pub use error::{LoggerError, LoggerResult};
pub use level::{ParseSeverityError, Severity};
pub use logger::Logger;
