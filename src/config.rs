//! Configuration file support for mvn-deptree.
//!
//! Provides YAML-based configuration through `mvn-deptree.config.yml` files,
//! including data structures, file loading, and CLI-over-config resolution.

use anyhow::Context;
use chrono::Local;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::filesystem::AnalysisLayout;
use crate::application::dto::OutputFormat;
use crate::shared::error::DeptreeError;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "mvn-deptree.config.yml";

const DEFAULT_ANALYSIS_DIR: &str = "analysis";
const DEFAULT_MAVEN_COMMAND: &str = "mvn";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub repos_dir: Option<String>,
    pub analysis_dir: Option<String>,
    pub includes: Option<String>,
    pub maven_command: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Fully resolved settings for the tree-building batch run.
#[derive(Debug, Clone)]
pub struct BuildSettings {
    pub repos_dir: PathBuf,
    pub analysis_dir: PathBuf,
    pub includes: String,
    pub maven_command: String,
}

/// Resolves build settings, CLI flags taking precedence over the config file.
///
/// # Errors
/// Returns `MissingConfiguration` when neither the CLI nor the config file
/// provides the repositories directory or the includes filter.
pub fn resolve_build(
    repos: Option<PathBuf>,
    analysis_dir: Option<PathBuf>,
    includes: Option<String>,
    maven: Option<String>,
    config: &ConfigFile,
) -> Result<BuildSettings> {
    let repos_dir = repos
        .or_else(|| config.repos_dir.as_ref().map(PathBuf::from))
        .ok_or_else(|| DeptreeError::MissingConfiguration {
            what: "repositories directory".to_string(),
            hint: format!("Pass --repos or set repos_dir in {}", CONFIG_FILENAME),
        })?;

    let includes = resolve_includes(includes, config)?;

    let analysis_dir = analysis_dir
        .or_else(|| config.analysis_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ANALYSIS_DIR));

    let maven_command = maven
        .or_else(|| config.maven_command.clone())
        .unwrap_or_else(|| DEFAULT_MAVEN_COMMAND.to_string());

    Ok(BuildSettings {
        repos_dir,
        analysis_dir,
        includes,
        maven_command,
    })
}

/// Resolves the directory holding the `*.json` tree corpus.
///
/// An explicit `--json-dir` wins; otherwise the directory is derived from
/// the configured analysis directory and includes filter, matching the
/// layout the build step produces.
pub fn resolve_json_dir(json_dir: Option<PathBuf>, config: &ConfigFile) -> Result<PathBuf> {
    if let Some(dir) = json_dir {
        return Ok(dir);
    }

    let includes = resolve_includes(None, config).map_err(|_| {
        DeptreeError::MissingConfiguration {
            what: "tree corpus directory".to_string(),
            hint: format!(
                "Pass --json-dir or set includes in {} so it can be derived",
                CONFIG_FILENAME
            ),
        }
    })?;
    let analysis_dir = config
        .analysis_dir
        .as_deref()
        .unwrap_or(DEFAULT_ANALYSIS_DIR);

    Ok(AnalysisLayout::locate(Path::new(analysis_dir), &includes)
        .json_dir()
        .to_path_buf())
}

/// Resolves where a report should go.
///
/// `Some(path)` means write to that file; `None` means stdout. Without an
/// explicit `--output`, a timestamped file under the analysis directory is
/// used; `-` forces stdout.
pub fn resolve_report_path(
    output: Option<String>,
    config: &ConfigFile,
    prefix: &str,
    format: OutputFormat,
) -> Option<PathBuf> {
    match output.as_deref() {
        Some("-") => None,
        Some(path) => Some(PathBuf::from(path)),
        None => {
            let analysis_dir = config
                .analysis_dir
                .as_deref()
                .unwrap_or(DEFAULT_ANALYSIS_DIR);
            let name = format!(
                "{}_{}.{}",
                prefix,
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            );
            Some(Path::new(analysis_dir).join(name))
        }
    }
}

fn resolve_includes(includes: Option<String>, config: &ConfigFile) -> Result<String> {
    includes
        .or_else(|| config.includes.clone())
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            DeptreeError::MissingConfiguration {
                what: "includes filter".to_string(),
                hint: format!(
                    "Pass --includes (e.g. com.acme) or set includes in {}",
                    CONFIG_FILENAME
                ),
            }
            .into()
        })
}
