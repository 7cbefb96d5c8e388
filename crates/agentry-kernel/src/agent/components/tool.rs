//! 工具组件
//! Tool Component
//!
//! 定义 Agent 可调用的工具接口以及按名称索引的工具集合
//! Defines the tool interface an Agent can invoke and the name-indexed tool set

use crate::agent::error::{AgentError, AgentResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use uuid::Uuid;

/// 工具动作 Trait
/// Tool Action Trait
///
/// 工具在集合中的名称即其标识，因此 trait 本身不携带名称
/// A tool is identified by its key in the tool set, so the trait carries no name
///
/// # 示例
/// # Example
///
/// ```rust,ignore
/// use agentry_kernel::agent::components::tool::{ToolAction, ToolContext, ToolInput, ToolOutput};
///
/// struct Sum;
///
/// #[async_trait]
/// impl ToolAction for Sum {
///     fn description(&self) -> &str { "Add two numbers" }
///
///     fn input_schema(&self) -> serde_json::Value {
///         serde_json::json!({
///             "type": "object",
///             "properties": { "a": { "type": "number" }, "b": { "type": "number" } },
///             "required": ["a", "b"]
///         })
///     }
///
///     async fn execute(&self, input: ToolInput, _ctx: &ToolContext) -> AgentResult<ToolOutput> {
///         let a = input.get_number("a").unwrap_or_default();
///         let b = input.get_number("b").unwrap_or_default();
///         Ok(ToolOutput::new(serde_json::json!(a + b)))
///     }
/// }
/// ```
#[async_trait]
pub trait ToolAction: Send + Sync {
    /// 工具描述
    /// Tool description
    fn description(&self) -> &str;

    /// 输入 JSON Schema
    /// Input JSON Schema
    fn input_schema(&self) -> serde_json::Value;

    /// 输出 JSON Schema (可选)
    /// Output JSON Schema (optional)
    fn output_schema(&self) -> Option<serde_json::Value> {
        None
    }

    /// 验证输入
    /// Validate input
    fn validate_input(&self, input: &ToolInput) -> AgentResult<()> {
        let _ = input;
        Ok(())
    }

    /// 执行工具
    /// Execute tool
    async fn execute(&self, input: ToolInput, ctx: &ToolContext) -> AgentResult<ToolOutput>;
}

/// 工具调用上下文
/// Tool invocation context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolContext {
    /// 调用方 Agent 的标识
    /// Identifier of the calling Agent
    pub agent_id: String,
    /// 本次调用的唯一 ID
    /// Unique ID of this invocation
    pub run_id: Uuid,
}

impl ToolContext {
    pub fn new(agent_id: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            run_id: Uuid::new_v4(),
        }
    }
}

/// 工具输入
/// Tool Input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolInput {
    /// 结构化参数
    /// Structured arguments
    pub arguments: serde_json::Value,
}

impl ToolInput {
    pub fn from_json(arguments: serde_json::Value) -> Self {
        Self { arguments }
    }

    /// 获取参数值
    /// Get parameter value
    pub fn get<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.arguments
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.arguments.get(key).and_then(|v| v.as_f64())
    }
}

impl From<serde_json::Value> for ToolInput {
    fn from(v: serde_json::Value) -> Self {
        Self::from_json(v)
    }
}

/// 工具输出
/// Tool Output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub value: serde_json::Value,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl ToolOutput {
    pub fn new(value: serde_json::Value) -> Self {
        Self {
            value,
            metadata: HashMap::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(serde_json::Value::String(text.into()))
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn as_text(&self) -> Option<&str> {
        self.value.as_str()
    }
}

/// 按名称索引的工具集合
/// Name-indexed tool set
///
/// 名称在集合内唯一，顺序无关。可为自定义结构体实现此 trait 以在编译期固定工具名称。
/// Names are unique within a set and order is irrelevant. Implement this trait on a
/// custom struct to fix the tool names at compile time.
pub trait ToolSet: Send + Sync {
    /// 全部工具名称 (无序)
    /// All tool names (unordered)
    fn names(&self) -> Vec<&str>;

    /// 按名称查找工具
    /// Look up a tool by name
    fn get(&self, name: &str) -> Option<&dyn ToolAction>;

    fn len(&self) -> usize {
        self.names().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// 默认工具集合类型
/// Default tool set type
pub type ToolMap = HashMap<String, Arc<dyn ToolAction>>;

impl ToolSet for HashMap<String, Arc<dyn ToolAction>> {
    fn names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn get(&self, name: &str) -> Option<&dyn ToolAction> {
        HashMap::get(self, name).map(|t| &**t as &dyn ToolAction)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl ToolSet for BTreeMap<String, Arc<dyn ToolAction>> {
    fn names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn get(&self, name: &str) -> Option<&dyn ToolAction> {
        BTreeMap::get(self, name).map(|t| &**t as &dyn ToolAction)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

/// 查找工具，不存在时返回 `ToolNotFound`
/// Look up a tool, returning `ToolNotFound` when absent
pub fn require_tool<'a, T: ToolSet + ?Sized>(
    tools: &'a T,
    name: &str,
) -> AgentResult<&'a dyn ToolAction> {
    tools
        .get(name)
        .ok_or_else(|| AgentError::ToolNotFound(name.to_string()))
}
