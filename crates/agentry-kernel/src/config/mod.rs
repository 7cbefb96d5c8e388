//! Agent manifest loading
//!
//! Loads [`AgentManifest`] values (identifier plus pass-through options) from
//! configuration files. Tools and metrics are code, not data, and are
//! attached to the resulting [`AgentConfig`](crate::agent::AgentConfig) by
//! the caller.
//!
//! ## Features
//!
//! - Format detection from the file extension (YAML, TOML, JSON, INI, RON, JSON5)
//! - Environment variable substitution (`${VAR}` and `$VAR` syntax)
//! - Layered merging, later sources override earlier ones
//! - `PREFIX__FIELD` environment overrides

use crate::agent::config::AgentManifest;
use crate::agent::error::AgentError;
use crate::error::{KernelError, KernelResult};
use config::{Config as Cfg, Environment, File};
use error_stack::{Report, ResultExt};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::LazyLock;

pub use config::FileFormat;


/// Configuration loading error
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parsing error: {0}")]
    Parse(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

static BRACED_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("braced env var pattern is valid")
});

static BARE_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)\b").expect("bare env var pattern is valid")
});

/// Detect configuration format from file extension
pub fn detect_format(path: &str) -> ConfigResult<FileFormat> {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| ConfigError::UnsupportedFormat("No file extension found".to_string()))?;

    match ext.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(FileFormat::Yaml),
        "toml" => Ok(FileFormat::Toml),
        "json" => Ok(FileFormat::Json),
        "ini" => Ok(FileFormat::Ini),
        "ron" => Ok(FileFormat::Ron),
        "json5" => Ok(FileFormat::Json5),
        _ => Err(ConfigError::UnsupportedFormat(ext.to_string())),
    }
}

/// Substitute environment variables in a string
///
/// `${VAR_NAME}` is replaced first, then `$VAR_NAME`. Unset variables are
/// left as written.
pub fn substitute_env_vars(content: &str) -> String {
    let braced = BRACED_VAR.replace_all(content, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    });

    BARE_VAR
        .replace_all(&braced, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

fn build<T>(builder: config::ConfigBuilder<config::builder::DefaultState>) -> ConfigResult<T>
where
    T: DeserializeOwned,
{
    let config = builder
        .build()
        .map_err(|e| ConfigError::Parse(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| ConfigError::Serialization(e.to_string()))
}

/// Load configuration from a string with explicit format
pub fn from_str<T>(content: &str, format: FileFormat) -> ConfigResult<T>
where
    T: DeserializeOwned,
{
    let substituted = substitute_env_vars(content);
    build(Cfg::builder().add_source(File::from_str(&substituted, format)))
}

/// Load configuration from a file
pub fn load_config<T>(path: &str) -> ConfigResult<T>
where
    T: DeserializeOwned,
{
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    from_str(&content, format)
}

/// Merge multiple configuration sources; later sources override earlier ones.
pub fn merge_configs<T>(sources: &[(&str, FileFormat)]) -> ConfigResult<T>
where
    T: DeserializeOwned,
{
    let mut builder = Cfg::builder();
    for (content, format) in sources {
        let substituted = substitute_env_vars(content);
        builder = builder.add_source(File::from_str(&substituted, *format));
    }
    build(builder)
}

/// Load configuration with environment variable overrides
///
/// For a field `model` and prefix `AGENTRY`, the override is `AGENTRY__MODEL`.
pub fn load_with_env<T>(path: &str, env_prefix: &str) -> ConfigResult<T>
where
    T: DeserializeOwned,
{
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    let substituted = substitute_env_vars(&content);

    build(
        Cfg::builder()
            .add_source(File::from_str(&substituted, format))
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("__")
                    .separator("__"),
            ),
    )
}

/// Load an [`AgentManifest`] from a file, attaching the path to any error.
pub fn load_manifest(path: &str) -> KernelResult<AgentManifest> {
    let manifest: AgentManifest = load_config(path)
        .map_err(|e| Report::new(KernelError::from(e)))
        .attach(format!("loading agent manifest from {path}"))?;

    if manifest.id.trim().is_empty() {
        return Err(Report::new(KernelError::from(AgentError::ConfigError(
            "agent manifest has an empty id".to_string(),
        ))))
        .attach(format!("validating agent manifest {path}"));
    }

    Ok(manifest)
}
