//! Error types for registry loading, routing, and configuration.

use thiserror::Error;

/// Errors surfaced by the roster library.
#[derive(Debug, Error)]
pub enum RosterError {
    /// A descriptor definition is missing a required field or is unparseable.
    #[error("Malformed agent descriptor ({origin}): {reason}")]
    MalformedDescriptor { origin: String, reason: String },

    /// The same agent id was declared twice within one source.
    #[error("Duplicate agent id '{agent_id}' in {origin}")]
    DuplicateAgent { agent_id: String, origin: String },

    /// A delegation names a target that is not in the registry.
    #[error("Agent '{source_agent_id}' delegates to unknown agent '{target_agent_id}'")]
    DanglingDelegation {
        source_agent_id: String,
        target_agent_id: String,
    },

    /// Caller referenced an agent id that is not registered.
    #[error("Agent not found: {0}")]
    UnknownAgent(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl RosterError {
    pub(crate) fn malformed(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        RosterError::MalformedDescriptor {
            origin: origin.into(),
            reason: reason.into(),
        }
    }
}

impl From<config::ConfigError> for RosterError {
    fn from(err: config::ConfigError) -> Self {
        RosterError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
