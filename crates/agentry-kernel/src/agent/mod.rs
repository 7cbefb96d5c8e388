//! 类型化 Agent 组合
//! Typed Agent composition
//!
//! Agent 对三件事泛型化：标识符、工具集合与指标集合。
//! An Agent is generic over three things: its identifier, its tool set and its metric set.
//!
//! ```rust,ignore
//! use agentry_kernel::agent::{Agent, AgentConfig};
//!
//! let agent = Agent::new(
//!     AgentConfig::new("a1")
//!         .with_tool("search", Arc::new(WebSearch))
//!         .with_metric("relevance", Arc::new(Relevance)),
//! )?;
//! assert_eq!(agent.tool_names(), vec!["search"]);
//! ```
//!
//! # 模块结构
//! # Module Structure
//!
//! - `config` - AgentConfig 与可透传选项 / AgentConfig and pass-through options
//! - `core` - Agent 与规范构造路径 / Agent and the canonical construction path
//! - `components` - 工具与指标 / tools and metrics
//! - `error` - 错误类型定义 / error type definitions

pub mod components;
pub mod config;
pub mod core;
pub mod error;

pub use components::{
    Metric, MetricMap, MetricResult, MetricSet, ToolAction, ToolContext, ToolInput, ToolMap,
    ToolOutput, ToolSet,
};
pub use config::{AgentConfig, AgentManifest, AgentOptions};
pub use self::core::{Agent, AgentId, construct};
pub use error::{AgentError, AgentResult};

/// Prelude 模块 - 常用类型导入
/// Prelude module - Common type imports
pub mod prelude {
    pub use super::components::{
        Metric, MetricMap, MetricResult, MetricSet, ToolAction, ToolContext, ToolInput, ToolMap,
        ToolOutput, ToolSet,
    };
    pub use super::config::{AgentConfig, AgentOptions};
    pub use super::core::{Agent, AgentId};
    pub use super::error::{AgentError, AgentResult};
    pub use async_trait::async_trait;
}
