//! 指标组件
//! Metric Component
//!
//! 描述如何为一次 Agent 交互的结果打分
//! Describes how the outcome of an Agent interaction is scored

use crate::agent::error::{AgentError, AgentResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// 一次评估的结果
/// Result of one evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    pub score: f64,
    #[serde(default)]
    pub info: HashMap<String, serde_json::Value>,
}

impl MetricResult {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            info: HashMap::new(),
        }
    }

    pub fn with_info(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.info.insert(key.into(), value);
        self
    }
}

/// 指标 Trait
/// Metric Trait
#[async_trait]
pub trait Metric: Send + Sync {
    /// 对输入与输出进行打分
    /// Score an input/output pair
    async fn measure(&self, input: &str, output: &str) -> AgentResult<MetricResult>;
}

/// 按名称索引的指标集合
/// Name-indexed metric set
pub trait MetricSet: Send + Sync {
    fn names(&self) -> Vec<&str>;

    fn get(&self, name: &str) -> Option<&dyn Metric>;

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

/// 默认指标集合类型
/// Default metric set type
pub type MetricMap = HashMap<String, Arc<dyn Metric>>;

impl MetricSet for HashMap<String, Arc<dyn Metric>> {
    fn names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn get(&self, name: &str) -> Option<&dyn Metric> {
        HashMap::get(self, name).map(|m| &**m as &dyn Metric)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl MetricSet for BTreeMap<String, Arc<dyn Metric>> {
    fn names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn get(&self, name: &str) -> Option<&dyn Metric> {
        BTreeMap::get(self, name).map(|m| &**m as &dyn Metric)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

/// 查找指标，不存在时返回 `NotFound`
/// Look up a metric, returning `NotFound` when absent
pub fn require_metric<'a, M: MetricSet + ?Sized>(
    metrics: &'a M,
    name: &str,
) -> AgentResult<&'a dyn Metric> {
    metrics
        .get(name)
        .ok_or_else(|| AgentError::NotFound(format!("metric '{name}'")))
}
