//! Agent 组件
//! Agent Components
//!
//! - `tool`: 工具动作与工具集合 / tool actions and tool sets
//! - `metric`: 指标与指标集合 / metrics and metric sets

pub mod metric;
pub mod tool;

pub use metric::{Metric, MetricMap, MetricResult, MetricSet};
pub use tool::{ToolAction, ToolContext, ToolInput, ToolMap, ToolOutput, ToolSet};
