//! XDG Base Directory locations for roster configuration and user agents.

use crate::error::{Result, RosterError};
use std::path::PathBuf;

/// Get XDG config home directory
///
/// Returns `$XDG_CONFIG_HOME` if set, otherwise defaults to `$HOME/.config`
/// Follows XDG Base Directory Specification
pub fn config_home() -> Result<PathBuf> {
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg_config_home.is_empty() {
            return Ok(PathBuf::from(xdg_config_home));
        }
    }

    let home = std::env::var("HOME").map_err(|_| {
        RosterError::ConfigError(
            "Could not determine XDG config home directory (HOME not set)".to_string(),
        )
    })?;

    Ok(PathBuf::from(home).join(".config"))
}

/// Returns `$XDG_CONFIG_HOME/roster/`
pub fn roster_config_dir() -> Result<PathBuf> {
    Ok(config_home()?.join("roster"))
}

/// Returns `$XDG_CONFIG_HOME/roster/config.toml`
pub fn global_config_path() -> Result<PathBuf> {
    Ok(roster_config_dir()?.join("config.toml"))
}

/// Get user agents directory path
///
/// Returns `$XDG_CONFIG_HOME/roster/agents/`. The directory is not created;
/// a missing directory simply contributes no agents.
pub fn agents_dir() -> Result<PathBuf> {
    Ok(roster_config_dir()?.join("agents"))
}
