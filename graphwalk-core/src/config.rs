//! Configuration loading from graphwalk.toml.

use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::{GraphwalkError, GraphwalkResult};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "graphwalk.toml";

/// Default exclusive length bound for short-word queries.
pub const DEFAULT_THRESHOLD: usize = 5;

/// Main configuration structure for graphwalk.toml.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GraphwalkConfig {
    /// Exclusive length bound used by `short-words` when none is given.
    pub threshold: Option<usize>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

impl GraphwalkConfig {
    /// Threshold from the file, or [`DEFAULT_THRESHOLD`].
    pub fn threshold_or_default(&self) -> usize {
        self.threshold.unwrap_or(DEFAULT_THRESHOLD)
    }

    /// Whether the file asks for JSON output.
    pub fn wants_json(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }
}

/// Loads configuration from `<dir>/graphwalk.toml` if it exists.
pub fn load_config(dir: &Path) -> GraphwalkResult<Option<GraphwalkConfig>> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    load_config_file(&path).map(Some)
}

/// Loads configuration from an explicit file path.
pub fn load_config_file(path: &Path) -> GraphwalkResult<GraphwalkConfig> {
    let content =
        fs::read_to_string(path).map_err(|e| GraphwalkError::config(path, e.to_string()))?;
    let cfg: GraphwalkConfig =
        toml::from_str(&content).map_err(|e| GraphwalkError::config(path, e.to_string()))?;

    if let Some(format) = cfg.output.as_ref().and_then(|o| o.format.as_deref()) {
        if !format.eq_ignore_ascii_case("json") && !format.eq_ignore_ascii_case("plain") {
            return Err(GraphwalkError::config(
                path,
                format!("unknown output format '{}', expected \"plain\" or \"json\"", format),
            ));
        }
    }
    Ok(cfg)
}
