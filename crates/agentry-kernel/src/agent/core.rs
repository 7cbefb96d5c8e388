//! Agent 核心
//! Agent Core
//!
//! 规范构造路径：`Agent::new(config)`。构造过程同步完成，不感知任何旧导入路径。
//! Canonical construction path: `Agent::new(config)`. Construction is synchronous and
//! knows nothing about legacy import paths.

use crate::agent::components::metric::{Metric, MetricMap, MetricResult, MetricSet, require_metric};
use crate::agent::components::tool::{
    ToolAction, ToolContext, ToolInput, ToolMap, ToolOutput, ToolSet, require_tool,
};
use crate::agent::config::{AgentConfig, AgentOptions};
use crate::agent::error::{AgentError, AgentResult};
use crate::logging::{SharedLogger, default_logger};
use futures::future::try_join_all;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Agent 标识符
/// Agent identifier
///
/// 任何可借用为字符串的类型均可作为标识符；唯一性由调用方负责。
/// Any type borrowable as a string can serve as an identifier; uniqueness is the
/// caller's responsibility.
pub trait AgentId: AsRef<str> + Clone + fmt::Debug + Send + Sync {}

impl<T> AgentId for T where T: AsRef<str> + Clone + fmt::Debug + Send + Sync {}

/// 已构造的 Agent
/// A constructed Agent
///
/// 标识符、工具集合与指标集合在生命周期内固定，不提供可变访问。
/// Identifier, tool set and metric set are fixed for the Agent's lifetime; no mutable
/// access is exposed.
pub struct Agent<I = String, T = ToolMap, M = MetricMap> {
    id: I,
    tools: T,
    metrics: M,
    options: AgentOptions,
    logger: SharedLogger,
}

impl<I, T, M> Agent<I, T, M>
where
    I: AgentId,
    T: ToolSet,
    M: MetricSet,
{
    /// 构造 Agent
    /// Construct an Agent
    ///
    /// 仅做一次形状校验：标识符不能为空；工具与指标名称非空、在各自集合内唯一，
    /// 且每个名称都能在集合中查到。
    /// Performs a single shape check: the identifier must be non-empty, and every tool
    /// and metric name must be non-empty, unique within its set and resolvable by it.
    pub fn new(config: AgentConfig<I, T, M>) -> AgentResult<Self> {
        let AgentConfig {
            id,
            tools,
            metrics,
            options,
            logger,
        } = config;

        if id.as_ref().trim().is_empty() {
            return Err(AgentError::ValidationFailed(
                "agent identifier must not be empty".to_string(),
            ));
        }
        check_names(id.as_ref(), "tool", tools.names(), |n| tools.get(n).is_some())?;
        check_names(id.as_ref(), "metric", metrics.names(), |n| metrics.get(n).is_some())?;

        tracing::debug!(
            agent_id = id.as_ref(),
            tools = tools.len(),
            metrics = metrics.len(),
            "agent constructed"
        );

        Ok(Self {
            id,
            tools,
            metrics,
            options,
            logger: logger.unwrap_or_else(default_logger),
        })
    }

    pub fn id(&self) -> &I {
        &self.id
    }

    /// 显示名，缺省为标识符
    /// Display name, defaults to the identifier
    pub fn name(&self) -> &str {
        self.options.name.as_deref().unwrap_or(self.id.as_ref())
    }

    pub fn options(&self) -> &AgentOptions {
        &self.options
    }

    pub fn instructions(&self) -> Option<&str> {
        self.options.instructions.as_deref()
    }

    pub fn logger(&self) -> &SharedLogger {
        &self.logger
    }

    pub fn tools(&self) -> &T {
        &self.tools
    }

    /// 排序后的工具名称
    /// Sorted tool names
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names = self.tools.names();
        names.sort_unstable();
        names
    }

    pub fn tool(&self, name: &str) -> Option<&dyn ToolAction> {
        self.tools.get(name)
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains(name)
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// 排序后的指标名称
    /// Sorted metric names
    pub fn metric_names(&self) -> Vec<&str> {
        let mut names = self.metrics.names();
        names.sort_unstable();
        names
    }

    pub fn metric(&self, name: &str) -> Option<&dyn Metric> {
        self.metrics.get(name)
    }

    /// 调用指定工具
    /// Invoke the named tool
    pub async fn execute_tool(
        &self,
        name: &str,
        input: impl Into<ToolInput>,
    ) -> AgentResult<ToolOutput> {
        let tool = require_tool(&self.tools, name)?;
        let input = input.into();
        tool.validate_input(&input)?;

        let ctx = ToolContext::new(self.id.as_ref());
        tracing::debug!(agent_id = self.id.as_ref(), tool = name, run_id = %ctx.run_id, "executing tool");
        tool.execute(input, &ctx).await
    }

    /// 使用指定指标评估一次交互
    /// Evaluate one interaction with the named metric
    pub async fn evaluate(&self, name: &str, input: &str, output: &str) -> AgentResult<MetricResult> {
        let metric = require_metric(&self.metrics, name)?;
        metric.measure(input, output).await
    }

    /// 并发运行全部指标，任一失败即返回该错误
    /// Run every metric concurrently; the first failure is returned
    pub async fn evaluate_all(
        &self,
        input: &str,
        output: &str,
    ) -> AgentResult<BTreeMap<String, MetricResult>> {
        let names = self.metric_names();
        let futures = names.iter().map(|name| async move {
            let result = self.evaluate(name, input, output).await?;
            Ok::<_, AgentError>((name.to_string(), result))
        });
        Ok(try_join_all(futures).await?.into_iter().collect())
    }
}

/// Declared names must be non-empty, distinct, and resolve to a member.
fn check_names(
    agent: &str,
    kind: &str,
    names: Vec<&str>,
    resolves: impl Fn(&str) -> bool,
) -> AgentResult<()> {
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if name.trim().is_empty() {
            return Err(AgentError::ValidationFailed(format!(
                "agent '{agent}' has a {kind} with an empty name"
            )));
        }
        if !seen.insert(name) {
            return Err(AgentError::ValidationFailed(format!(
                "agent '{agent}' declares {kind} '{name}' more than once"
            )));
        }
        if !resolves(name) {
            return Err(AgentError::ValidationFailed(format!(
                "agent '{agent}' declares {kind} '{name}' but does not provide it"
            )));
        }
    }
    Ok(())
}

/// 规范构造函数，等价于 [`Agent::new`]
/// Canonical constructor, equivalent to [`Agent::new`]
pub fn construct<I, T, M>(config: AgentConfig<I, T, M>) -> AgentResult<Agent<I, T, M>>
where
    I: AgentId,
    T: ToolSet,
    M: MetricSet,
{
    Agent::new(config)
}

impl<I: fmt::Debug, T: ToolSet, M: MetricSet> fmt::Debug for Agent<I, T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tools = self.tools.names();
        tools.sort_unstable();
        let mut metrics = self.metrics.names();
        metrics.sort_unstable();
        f.debug_struct("Agent")
            .field("id", &self.id)
            .field("tools", &tools)
            .field("metrics", &metrics)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
