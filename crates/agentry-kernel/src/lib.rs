//! Agentry Kernel
//!
//! Typed agent composition: an [`Agent`](agent::Agent) is parameterized over
//! its identifier, its tool set and its metric set, and is built from an
//! [`AgentConfig`](agent::AgentConfig) through the canonical constructor or
//! through a deprecated forwarding path (see [`deprecation`]).

// agent module
pub mod agent;

// deprecated construction paths
pub mod deprecation;

// error module
pub mod error;

// logger collaborator
pub mod logging;

// manifest loading
#[cfg(feature = "config")]
pub mod config;

pub use agent::{Agent, AgentConfig, AgentError, AgentResult};
pub use logging::{LogError, LogLevel, Logger, NoopLogger, TracingLogger};
