#![allow(deprecated)]

use agentry::agent::{
    Agent, AgentConfig, AgentError, Metric, MetricMap, ToolAction, ToolSet,
};
use agentry::deprecation::LEGACY_AGENT_PATH;
use agentry::logging::{Logger, TracingLogger};
use agentry_testing::{
    CapturedOutput, FailingLogger, FixedMetric, MockTool, PanickingLogger, RecordingLogger,
};
use serde_json::json;
use std::sync::Arc;

fn research_config(logger: &RecordingLogger) -> AgentConfig {
    AgentConfig::new("a1".to_string())
        .with_tool("search", Arc::new(MockTool::new("Search the web", json!({}))))
        .with_tool("sum", Arc::new(MockTool::new("Add numbers", json!({}))))
        .with_metric("relevance", Arc::new(FixedMetric::new(0.8)))
        .with_instructions("Cite sources")
        .with_logger(Arc::new(logger.clone()))
}

#[test]
fn test_canonical_construction_of_empty_agent() {
    let logger = RecordingLogger::new();
    let agent = Agent::new(AgentConfig::new("a1").with_logger(Arc::new(logger.clone()))).unwrap();

    assert_eq!(agent.id(), &"a1");
    assert!(agent.tool_names().is_empty());
    assert!(agent.metric_names().is_empty());
    agentry_testing::assert_warned!(logger, 0);
}

#[test]
fn test_deprecated_construction_of_empty_agent() {
    let logger = RecordingLogger::new();
    let agent =
        agentry::Agent::new(AgentConfig::new("a1").with_logger(Arc::new(logger.clone()))).unwrap();

    assert_eq!(agent.id(), &"a1");
    assert!(agent.tool_names().is_empty());
    assert!(agent.metric_names().is_empty());
    agentry_testing::assert_warned!(logger, 1);
}

#[test]
fn test_deprecated_path_matches_canonical_path() {
    let canonical_logger = RecordingLogger::new();
    let legacy_logger = RecordingLogger::new();

    let canonical = Agent::new(research_config(&canonical_logger)).unwrap();
    let legacy = agentry::Agent::new(research_config(&legacy_logger)).unwrap();

    assert_eq!(canonical.id(), legacy.id());
    assert_eq!(canonical.tool_names(), legacy.tool_names());
    assert_eq!(canonical.metric_names(), legacy.metric_names());
    assert_eq!(canonical.options(), legacy.options());
    assert_eq!(legacy.instructions(), Some("Cite sources"));
}

#[test]
fn test_warning_names_both_paths() {
    let logger = RecordingLogger::new();
    agentry::Agent::new(research_config(&logger)).unwrap();

    let warnings = logger.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0], LEGACY_AGENT_PATH.message());
    assert!(warnings[0].contains("\"agentry::agent\""));
    assert!(warnings[0].contains("\"agentry\""));
}

#[test]
fn test_every_deprecated_call_warns() {
    let logger = RecordingLogger::new();

    let first = agentry::Agent::new(research_config(&logger)).unwrap();
    let second = agentry::Agent::new(research_config(&logger)).unwrap();
    let third = agentry::Agent::new(research_config(&logger)).unwrap();

    agentry_testing::assert_warned!(logger, 3);
    // Independent instances: each owns its own tool set.
    assert!(!std::ptr::eq(first.tools(), second.tools()));
    assert!(!std::ptr::eq(second.tools(), third.tools()));
}

#[test]
fn test_failing_logger_never_fails_construction() {
    let agent = agentry::Agent::new(AgentConfig::new("a1").with_logger(Arc::new(FailingLogger)))
        .unwrap();
    assert_eq!(agent.name(), "a1");

    let agent = agentry::Agent::new(AgentConfig::new("a1").with_logger(Arc::new(PanickingLogger)))
        .unwrap();
    assert_eq!(agent.name(), "a1");
}

#[test]
fn test_delegation_error_propagates_unchanged() {
    let logger = RecordingLogger::new();

    let canonical = Agent::new(AgentConfig::new("")).unwrap_err();
    let legacy =
        agentry::Agent::new(AgentConfig::new("").with_logger(Arc::new(logger.clone()))).unwrap_err();

    assert!(matches!(legacy, AgentError::ValidationFailed(_)));
    assert_eq!(canonical.to_string(), legacy.to_string());
    // Warned regardless of the construction outcome.
    agentry_testing::assert_warned!(logger, 1);
}

#[test]
fn test_concurrent_deprecated_constructions() {
    let logger = RecordingLogger::new();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let logger = logger.clone();
            std::thread::spawn(move || {
                let config =
                    AgentConfig::new(format!("agent-{i}")).with_logger(Arc::new(logger));
                agentry::Agent::new(config).map(|agent| agent.id().clone())
            })
        })
        .collect();

    let mut ids: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    ids.sort();

    assert_eq!(ids.len(), 8);
    assert_eq!(ids[0], "agent-0");
    agentry_testing::assert_warned!(logger, 8);
}

/// A tool set whose names are fixed by its type.
struct MathTools {
    search: MockTool,
    sum: MockTool,
}

impl ToolSet for MathTools {
    fn names(&self) -> Vec<&str> {
        vec!["search", "sum"]
    }

    fn get(&self, name: &str) -> Option<&dyn ToolAction> {
        match name {
            "search" => Some(&self.search as &dyn ToolAction),
            "sum" => Some(&self.sum as &dyn ToolAction),
            _ => None,
        }
    }
}

#[tokio::test]
async fn test_typed_tool_set_is_preserved() {
    let tools = MathTools {
        search: MockTool::new("Search", json!({ "type": "object" })),
        sum: MockTool::new("Sum", json!({ "type": "object" })),
    };
    let config = AgentConfig::from_parts("math", tools, MetricMap::new())
        .with_logger(Arc::new(RecordingLogger::new()));

    let agent: Agent<&str, MathTools> = agentry::Agent::new(config).unwrap();
    assert_eq!(agent.tool_names(), vec!["search", "sum"]);

    agent
        .execute_tool("sum", json!({ "a": 1, "b": 2 }))
        .await
        .unwrap();

    // The concrete tool set type survives construction.
    agentry_testing::assert_tool_called!(agent.tools().sum, 1);
    agentry_testing::assert_tool_called!(agent.tools().search, 0);
    let history = agent.tools().sum.history().await;
    assert_eq!(history[0].1.agent_id, "math");
}

#[tokio::test]
async fn test_constructed_agent_is_fully_capable() -> anyhow::Result<()> {
    let search = MockTool::new("Search the web", json!({}));
    let relevance = FixedMetric::new(0.75);

    let agent = agentry::Agent::new(
        AgentConfig::new("researcher")
            .with_tool("search", Arc::new(search.clone()))
            .with_metric("relevance", Arc::new(relevance.clone()))
            .with_logger(Arc::new(RecordingLogger::new())),
    )?;

    let output = agent.execute_tool("search", json!({ "q": "rust" })).await?;
    assert_eq!(output.as_text(), Some("Mock Execution Default"));
    agentry_testing::assert_tool_called!(search, 1);

    let scores = agent.evaluate_all("question", "answer").await?;
    assert_eq!(scores["relevance"].score, 0.75);
    assert_eq!(relevance.call_count(), 1);

    let missing = agent.execute_tool("translate", json!({})).await.unwrap_err();
    assert!(matches!(missing, AgentError::ToolNotFound(_)));
    Ok(())
}

#[test]
fn test_manifest_through_legacy_path() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("agent.yaml");
    std::fs::write(&path, "id: writer\nname: Writer\nmodel: small\n")?;

    let manifest = agentry::config::load_manifest(path.to_str().unwrap_or_default())
        .map_err(|report| anyhow::anyhow!("{report:?}"))?;

    let logger = RecordingLogger::new();
    let agent = agentry::Agent::new(
        AgentConfig::from_manifest(manifest).with_logger(Arc::new(logger.clone())),
    )?;

    assert_eq!(agent.id(), "writer");
    assert_eq!(agent.name(), "Writer");
    assert_eq!(agent.options().model.as_deref(), Some("small"));
    agentry_testing::assert_warned!(logger, 1);
    Ok(())
}

#[test]
fn test_default_logger_warns_through_tracing() {
    let captured = CapturedOutput::new();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        agentry::Agent::new(AgentConfig::new("a1")).unwrap();
        Agent::new(AgentConfig::new("a2")).unwrap();
    });

    let output = captured.contents();
    assert_eq!(output.matches("Please import").count(), 1);
    assert!(output.contains("WARN"));
}

#[test]
fn test_tracing_logger_writes_component_and_message() {
    let captured = CapturedOutput::new();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        TracingLogger::new("legacy").warn("switch import path").unwrap();
    });

    let output = captured.contents();
    assert!(output.contains("WARN"));
    assert!(output.contains("switch import path"));
    assert!(output.contains("legacy"));
}

#[test]
fn test_metric_set_unaffected_by_legacy_path() {
    let mut metrics = MetricMap::new();
    let fixed: Arc<dyn Metric> = Arc::new(FixedMetric::new(1.0));
    metrics.insert("accuracy".to_string(), fixed.clone());
    metrics.insert("tone".to_string(), fixed);

    let agent = agentry::Agent::new(
        AgentConfig::new("a1")
            .with_metrics(metrics)
            .with_logger(Arc::new(RecordingLogger::new())),
    )
    .unwrap();

    assert_eq!(agent.metric_names(), vec!["accuracy", "tone"]);
    assert!(agent.metric("accuracy").is_some());
}
