//! Agent 配置
//! Agent Configuration
//!
//! 调用方在构造 Agent 前提供的数据形状
//! The shape a caller supplies before constructing an Agent

use crate::agent::components::metric::{Metric, MetricMap};
use crate::agent::components::tool::{ToolAction, ToolMap};
use crate::logging::{Logger, SharedLogger};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// 透传选项
// Pass-through options
// ============================================================================

/// 基础 Agent 选项
/// Base Agent options
///
/// 构造层不解释这些字段，原样交给 Agent
/// The construction layer does not interpret these fields; they go to the Agent unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentOptions {
    /// 显示名 (缺省为标识符)
    /// Display name (defaults to the identifier)
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// 系统指令
    /// System instructions
    #[serde(default)]
    pub instructions: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    /// 自定义配置
    /// Custom configuration
    #[serde(default)]
    pub custom: HashMap<String, serde_json::Value>,
}

/// 可从配置文件加载的 Agent 描述
/// Agent description loadable from a configuration file
///
/// 未知的顶层键会被拒绝；任意附加数据须放在 `custom` 下。
/// Unknown top-level keys are rejected; arbitrary extra data belongs under `custom`.
///
/// ```toml
/// id = "researcher"
/// name = "Research Assistant"
/// instructions = "Answer with citations"
/// model = "gpt-4o"
///
/// [custom]
/// temperature = 0.2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ManifestFields")]
pub struct AgentManifest {
    pub id: String,

    #[serde(flatten)]
    pub options: AgentOptions,
}

/// Wire shape of [`AgentManifest`]; `flatten` cannot deny unknown fields.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFields {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    instructions: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    custom: HashMap<String, serde_json::Value>,
}

impl From<ManifestFields> for AgentManifest {
    fn from(fields: ManifestFields) -> Self {
        Self {
            id: fields.id,
            options: AgentOptions {
                name: fields.name,
                description: fields.description,
                instructions: fields.instructions,
                model: fields.model,
                custom: fields.custom,
            },
        }
    }
}

// ============================================================================
// 主配置结构
// Main configuration structure
// ============================================================================

/// Agent 配置
/// Agent Configuration
///
/// 对标识符、工具集合和指标集合三者泛型化，构造后的 Agent 保留完全相同的类型参数。
/// Generic over identifier, tool set and metric set; the constructed Agent keeps exactly
/// the same type parameters.
///
/// # 示例
/// # Example
///
/// ```rust,ignore
/// use agentry_kernel::agent::{Agent, AgentConfig};
///
/// let config = AgentConfig::new("a1")
///     .with_tool("search", Arc::new(WebSearch))
///     .with_instructions("Be concise");
/// let agent = Agent::new(config)?;
/// ```
pub struct AgentConfig<I = String, T = ToolMap, M = MetricMap> {
    /// Agent 标识符
    /// Agent identifier
    pub id: I,

    /// 工具集合
    /// Tool set
    pub tools: T,

    /// 指标集合
    /// Metric set
    pub metrics: M,

    pub options: AgentOptions,

    /// 注入的日志器 (缺省使用 `TracingLogger`)
    /// Injected logger (defaults to `TracingLogger`)
    pub logger: Option<SharedLogger>,
}

impl<I> AgentConfig<I> {
    /// 以空工具集合与空指标集合创建配置
    /// Create a config with an empty tool set and an empty metric set
    pub fn new(id: I) -> Self {
        Self {
            id,
            tools: ToolMap::new(),
            metrics: MetricMap::new(),
            options: AgentOptions::default(),
            logger: None,
        }
    }
}

impl AgentConfig {
    /// 从配置文件描述创建
    /// Create from a manifest loaded from a file
    pub fn from_manifest(manifest: AgentManifest) -> Self {
        let mut config = Self::new(manifest.id);
        config.options = manifest.options;
        config
    }
}

impl<I, M> AgentConfig<I, ToolMap, M> {
    /// 添加工具
    /// Add tool
    pub fn with_tool(mut self, name: impl Into<String>, tool: Arc<dyn ToolAction>) -> Self {
        self.tools.insert(name.into(), tool);
        self
    }
}

impl<I, T> AgentConfig<I, T, MetricMap> {
    /// 添加指标
    /// Add metric
    pub fn with_metric(mut self, name: impl Into<String>, metric: Arc<dyn Metric>) -> Self {
        self.metrics.insert(name.into(), metric);
        self
    }
}

impl<I, T, M> AgentConfig<I, T, M> {
    /// 从全部部件创建
    /// Create from all parts
    pub fn from_parts(id: I, tools: T, metrics: M) -> Self {
        Self {
            id,
            tools,
            metrics,
            options: AgentOptions::default(),
            logger: None,
        }
    }

    /// 替换工具集合 (可改变集合类型)
    /// Replace the tool set (may change its type)
    pub fn with_tools<T2>(self, tools: T2) -> AgentConfig<I, T2, M> {
        AgentConfig {
            id: self.id,
            tools,
            metrics: self.metrics,
            options: self.options,
            logger: self.logger,
        }
    }

    /// 替换指标集合 (可改变集合类型)
    /// Replace the metric set (may change its type)
    pub fn with_metrics<M2>(self, metrics: M2) -> AgentConfig<I, T, M2> {
        AgentConfig {
            id: self.id,
            tools: self.tools,
            metrics,
            options: self.options,
            logger: self.logger,
        }
    }

    pub fn with_options(mut self, options: AgentOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.options.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.options.description = Some(description.into());
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.options.instructions = Some(instructions.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.options.model = Some(model.into());
        self
    }

    pub fn with_custom(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.options.custom.insert(key.into(), value);
        self
    }

    /// 注入日志器
    /// Inject a logger
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }
}

impl<I: fmt::Debug, T, M> fmt::Debug for AgentConfig<I, T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentConfig")
            .field("id", &self.id)
            .field("options", &self.options)
            .field("has_logger", &self.logger.is_some())
            .finish_non_exhaustive()
    }
}
