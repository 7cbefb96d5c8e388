//! Logger collaborator
//!
//! Agents never reach for a process-wide logger. Every agent owns an
//! injected [`Logger`]; the default [`TracingLogger`] forwards to `tracing`,
//! and tests substitute their own implementation.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Severity of a diagnostic emitted through a [`Logger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(s)
    }
}

/// Failure reported by a logger backend.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("Logger unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write log record: {0}")]
    Write(String),
}

/// Severity-tagged diagnostic sink.
///
/// Implementations must be safe to call from concurrent constructions.
pub trait Logger: Send + Sync {
    /// Emit one record at the given level.
    fn log(&self, level: LogLevel, message: &str) -> Result<(), LogError>;

    fn debug(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Debug, message)
    }

    fn info(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Info, message)
    }

    fn warn(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Warn, message)
    }

    fn error(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Error, message)
    }
}

/// Shared logger handle held by agents and configs.
pub type SharedLogger = Arc<dyn Logger>;

/// Forwards records to the `tracing` macros under the `agentry` target.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    component: String,
}

impl TracingLogger {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("agent")
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        let component = self.component.as_str();
        match level {
            LogLevel::Debug => tracing::debug!(target: "agentry", component, "{message}"),
            LogLevel::Info => tracing::info!(target: "agentry", component, "{message}"),
            LogLevel::Warn => tracing::warn!(target: "agentry", component, "{message}"),
            LogLevel::Error => tracing::error!(target: "agentry", component, "{message}"),
        }
        Ok(())
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: LogLevel, _message: &str) -> Result<(), LogError> {
        Ok(())
    }
}

/// The logger an agent gets when its config does not carry one.
pub fn default_logger() -> SharedLogger {
    Arc::new(TracingLogger::default())
}
