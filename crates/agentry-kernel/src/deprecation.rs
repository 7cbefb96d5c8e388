//! Deprecated construction paths
//!
//! A deprecated entry point is a plain forwarding function: it emits a
//! warning through the agent's injected logger, then calls the canonical
//! constructor and returns its result untouched. The canonical [`Agent`]
//! never learns which path built it.
//!
//! The warning is emitted on every call, before delegation, and is
//! best-effort: a logger that returns an error or panics cannot turn a
//! construction into a failure.

use crate::agent::components::metric::MetricSet;
use crate::agent::components::tool::ToolSet;
use crate::agent::config::AgentConfig;
use crate::agent::core::{Agent, AgentId};
use crate::agent::error::AgentResult;
use crate::logging::{Logger, default_logger};
use std::panic::{AssertUnwindSafe, catch_unwind};

/// A legacy import path together with the path that replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeprecatedPath {
    pub item: &'static str,
    pub deprecated: &'static str,
    pub canonical: &'static str,
}

impl DeprecatedPath {
    pub const fn new(item: &'static str, deprecated: &'static str, canonical: &'static str) -> Self {
        Self {
            item,
            deprecated,
            canonical,
        }
    }

    /// Fixed warning text naming both paths.
    pub fn message(&self) -> String {
        format!(
            r#"Please import "{}" from "{}" instead of "{}""#,
            self.item, self.canonical, self.deprecated
        )
    }
}

/// `agentry::Agent` was moved to `agentry::agent::Agent`.
pub const LEGACY_AGENT_PATH: DeprecatedPath =
    DeprecatedPath::new("Agent", "agentry", "agentry::agent");

/// Emit a warning, swallowing logger errors and panics.
///
/// Returns whether the logger accepted the record.
pub fn warn_best_effort(logger: &dyn Logger, message: &str) -> bool {
    match catch_unwind(AssertUnwindSafe(|| logger.warn(message))) {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::trace!(error = %e, "deprecation warning dropped by logger");
            false
        }
        Err(_) => {
            tracing::trace!("logger panicked while emitting deprecation warning");
            false
        }
    }
}

/// Construct through a deprecated path.
///
/// Warns once through the config's logger (or the default logger when the
/// config carries none), then delegates to [`Agent::new`]. Errors from the
/// canonical constructor propagate unchanged; the warning is emitted even
/// when construction then fails.
pub fn construct_deprecated<I, T, M>(
    path: &DeprecatedPath,
    mut config: AgentConfig<I, T, M>,
) -> AgentResult<Agent<I, T, M>>
where
    I: AgentId,
    T: ToolSet,
    M: MetricSet,
{
    // The agent keeps the logger that emitted its warning.
    let logger = config.logger.get_or_insert_with(default_logger);
    warn_best_effort(&**logger, &path.message());
    Agent::new(config)
}
