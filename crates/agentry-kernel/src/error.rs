//! Crate-level error types for `agentry-kernel`.
//!
//! Provides a unified [`KernelError`] composing the errors of each
//! sub-module, used with [`error_stack::Report`] at boundaries where the
//! caller benefits from attached context (for example which manifest file
//! failed to load).
//!
//! # Usage
//!
//! ```rust,ignore
//! use agentry_kernel::error::{KernelError, KernelResult};
//! use error_stack::ResultExt;
//!
//! fn build() -> KernelResult<Agent> {
//!     Agent::new(config)
//!         .map_err(KernelError::from)
//!         .map_err(error_stack::Report::new)
//!         .attach("building research agent")
//! }
//! ```

use crate::agent::error::AgentError;
use thiserror::Error;

/// Crate-level error type for `agentry-kernel`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KernelError {
    /// An error originating from the agent sub-system.
    #[error("Agent error: {0}")]
    Agent(#[from] AgentError),

    /// A configuration-loading error (requires the `config` feature).
    #[cfg(feature = "config")]
    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Convenience result alias using [`error_stack::Report`].
pub type KernelResult<T> = Result<T, error_stack::Report<KernelError>>;
