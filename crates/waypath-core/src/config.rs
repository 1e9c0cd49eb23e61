//! Route configuration for waypath
//!
//! Configuration is read from `waypath.toml` in the working directory, or
//! from the file named by `WAYPATH_CONFIG`. A missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{Result, WaypathError};

pub use types::{RouteConfig, DEFAULT_DISTANCE_UNIT, DEFAULT_GRAPH_FILE, DEFAULT_RESULTS_FILE};

/// Name of the per-directory configuration file
pub const CONFIG_FILE: &str = "waypath.toml";

const CONFIG_PATH_ENV_VAR: &str = "WAYPATH_CONFIG";

impl RouteConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| WaypathError::io_operation("read config", path.display(), e))?;
        let config: RouteConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config path for `dir` and load it, falling back to defaults
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = Self::config_path(dir);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        tracing::debug!(path = %path.display(), "loading config");
        Self::load(&path)
    }

    /// Config file consulted for `dir`: `WAYPATH_CONFIG` if set, else `waypath.toml`
    pub fn config_path(dir: &Path) -> PathBuf {
        match std::env::var(CONFIG_PATH_ENV_VAR) {
            Ok(explicit) => PathBuf::from(explicit),
            Err(_) => dir.join(CONFIG_FILE),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WaypathError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| WaypathError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(mut self, graph: Option<&Path>, results: Option<&Path>) -> Self {
        if let Some(graph) = graph {
            self.graph_file = graph.display().to_string();
        }
        if let Some(results) = results {
            self.results_file = results.display().to_string();
        }
        self
    }

    fn validate(&self) -> Result<()> {
        if self.graph_file.trim().is_empty() {
            bail_invalid!("graph_file", "(empty)");
        }
        if self.results_file.trim().is_empty() {
            bail_invalid!("results_file", "(empty)");
        }
        Ok(())
    }
}
