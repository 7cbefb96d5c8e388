//! Agent 错误类型定义
//!
//! 统一的 Agent 错误处理

use thiserror::Error;

/// Agent 操作结果类型
pub type AgentResult<T> = Result<T, AgentError>;

/// Agent 错误类型
#[derive(Debug, Error)]
pub enum AgentError {
    /// 配置校验失败
    #[error("Agent validation failed: {0}")]
    ValidationFailed(String),

    /// 指标或资源未找到
    #[error("Not found: {0}")]
    NotFound(String),

    /// 工具未找到
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// 工具执行失败
    #[error("Tool execution failed: {tool_name}: {message}")]
    ToolExecutionFailed { tool_name: String, message: String },

    /// 指标计算失败
    #[error("Metric evaluation failed: {metric_name}: {message}")]
    MetricFailed {
        metric_name: String,
        message: String,
    },

    /// 无效输入
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 配置错误 (清单内容不可用)
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AgentError {
    /// 创建工具执行失败错误
    pub fn tool_execution_failed(tool_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolExecutionFailed {
            tool_name: tool_name.into(),
            message: message.into(),
        }
    }

    /// 创建指标计算失败错误
    pub fn metric_failed(metric_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MetricFailed {
            metric_name: metric_name.into(),
            message: message.into(),
        }
    }
}
