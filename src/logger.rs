//! Logging capability used by the client
//!
//! The client reports each publish outcome through a [`Logger`]. Two sinks ship
//! with the crate:
//! - [`StdoutLogger`] - timestamped lines on stdout (the default)
//! - [`LogFacadeLogger`] - forwards to the `log` crate, for applications that
//!   already run `env_logger` or another backend

use chrono::Local;
use std::io::Write;

/// Anything that can take an informational message
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
}

/// Writes `[YYYY-mm-dd HH:MM:SS] INFO <message>` lines to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutLogger;

impl StdoutLogger {
    pub fn format_line(message: &str) -> String {
        format!("[{}] INFO {}", Local::now().format("%Y-%m-%d %H:%M:%S"), message)
    }
}

impl Logger for StdoutLogger {
    fn info(&self, message: &str) {
        let mut stdout = std::io::stdout().lock();
        // A broken stdout must not fail the publish
        let _ = writeln!(stdout, "{}", Self::format_line(message));
    }
}

/// Forwards messages to `log::info!` under the `eventify` target
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacadeLogger;

impl Logger for LogFacadeLogger {
    fn info(&self, message: &str) {
        log::info!(target: "eventify", "{}", message);
    }
}
