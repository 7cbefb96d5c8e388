//! Agentry SDK - Standard import surface for typed agents
//!
//! # Import paths
//!
//! ```text
//! agentry::agent::Agent   canonical
//! agentry::Agent          legacy, deprecated; warns on every construction
//! ```
//!
//! # Quick Start
//!
//! ```toml
//! agentry-sdk = "0.1"
//! ```
//!
//! ```rust,ignore
//! use agentry::agent::{Agent, AgentConfig};
//! use std::sync::Arc;
//!
//! let agent = Agent::new(
//!     AgentConfig::new("a1")
//!         .with_tool("search", Arc::new(WebSearch))
//!         .with_metric("relevance", Arc::new(Relevance)),
//! )?;
//! let hits = agent.execute_tool("search", serde_json::json!({ "q": "rust" })).await?;
//! ```

use agentry_kernel::agent::{AgentConfig, AgentId, AgentResult, MetricSet, ToolSet};
use agentry_kernel::deprecation::{LEGACY_AGENT_PATH, construct_deprecated};

// =============================================================================
// Canonical agent surface
// =============================================================================

/// Agents, their configuration, tools and metrics.
///
/// This is the canonical import path for [`agent::Agent`].
pub mod agent {
    pub use agentry_kernel::agent::components::metric::{Metric, MetricMap, MetricResult, MetricSet};
    pub use agentry_kernel::agent::components::tool::{
        ToolAction, ToolContext, ToolInput, ToolMap, ToolOutput, ToolSet,
    };
    pub use agentry_kernel::agent::{
        Agent, AgentConfig, AgentError, AgentId, AgentManifest, AgentOptions, AgentResult,
        construct,
    };
}

/// Logger collaborator and its stock implementations.
pub mod logging {
    pub use agentry_kernel::logging::*;
}

/// Manifest loading (formats, env substitution, merge).
#[cfg(feature = "config")]
pub mod config {
    pub use agentry_kernel::config::*;
}

/// Error types shared across the kernel.
pub mod error {
    pub use agentry_kernel::error::{KernelError, KernelResult};
}

/// Deprecated import paths and their forwarding constructors.
pub mod deprecation {
    pub use agentry_kernel::deprecation::*;
}

/// Common imports.
pub mod prelude {
    pub use agentry_kernel::agent::prelude::*;
    pub use agentry_kernel::logging::{Logger, TracingLogger};
}

// =============================================================================
// Legacy surface
// =============================================================================

/// Legacy entry point for constructing agents.
///
/// `Agent::new` builds exactly what [`agent::Agent::new`] builds and also
/// emits a warning through the config's logger on every call.
#[deprecated(since = "0.1.0", note = "import `Agent` from `agentry::agent` instead")]
pub struct Agent;

#[allow(deprecated)]
impl Agent {
    /// Construct an [`agent::Agent`], warning that this path is deprecated.
    pub fn new<I, T, M>(config: AgentConfig<I, T, M>) -> AgentResult<agent::Agent<I, T, M>>
    where
        I: AgentId,
        T: ToolSet,
        M: MetricSet,
    {
        construct_deprecated(&LEGACY_AGENT_PATH, config)
    }
}
