//! Configuration: registry sources, matcher weights, logging.
//!
//! Loaded through [`ConfigLoader`] from layered sources (defaults, global file,
//! workspace file, `ROSTER__*` environment).

mod facade;
mod merge;
pub mod paths;
mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;

use crate::error::{Result, RosterError};
use crate::logging::LoggingConfig;
use crate::types::Score;
use serde::{Deserialize, Serialize};

/// Workspace-level config file name.
pub const WORKSPACE_CONFIG_FILE: &str = "roster.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub registry: RegistryConfig,
    pub matcher: MatcherConfig,
    pub logging: LoggingConfig,
}

impl RosterConfig {
    /// Reject settings the matcher cannot work with.
    pub fn validate(&self) -> Result<()> {
        self.matcher.validate()
    }
}

/// How dangling delegation targets are treated at load time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Integrity {
    /// Fail the load
    #[default]
    Strict,
    /// Log a warning and keep the delegation
    Warn,
}

/// Where descriptors come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Load the persona documents shipped with roster
    pub include_builtin: bool,
    /// Load `$XDG_CONFIG_HOME/roster/agents/`
    pub include_user_agents: bool,
    /// Extra agent directories (`~/`, `./`, absolute, else relative to the workspace)
    pub paths: Vec<String>,
    /// Team filter: when non-empty, only these agent ids are kept
    pub only: Vec<String>,
    pub integrity: Integrity,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            include_user_agents: true,
            paths: Vec::new(),
            only: Vec::new(),
            integrity: Integrity::Strict,
        }
    }
}

/// Matcher scoring knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Points per task word found in an agent's vocabulary
    pub word_weight: Score,
    /// Points per trigger phrase found whole in the task
    pub phrase_weight: Score,
    /// Minimum score for a result to be returned (at least 1)
    pub min_score: Score,
    /// Maximum number of results, 0 for no limit
    pub limit: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            word_weight: 1,
            phrase_weight: 3,
            min_score: 1,
            limit: 0,
        }
    }
}

impl MatcherConfig {
    pub fn validate(&self) -> Result<()> {
        if self.word_weight == 0 && self.phrase_weight == 0 {
            return Err(RosterError::ConfigError(
                "matcher.word_weight and matcher.phrase_weight cannot both be 0".to_string(),
            ));
        }
        if self.min_score == 0 {
            return Err(RosterError::ConfigError(
                "matcher.min_score must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
