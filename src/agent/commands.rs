//! Agent command service: single entry point per CLI command variant.
//!
//! Owns the registry-facing workflow; the CLI parses, calls one method per
//! variant, and formats output.

use crate::agent::domain::{AgentDescriptor, Delegation, ValidationResult};
use crate::agent::registry::Registry;
use crate::config::MatcherConfig;
use crate::error::RosterError;
use crate::routing::{DelegationResolver, Matcher, Resolution};
use crate::types::{AgentId, Score};
use serde::Serialize;

pub struct AgentCommandService;

/// Result of agent list command.
#[derive(Debug, Clone)]
pub struct AgentListResult {
    pub agents: Vec<AgentListItem>,
}

#[derive(Debug, Clone)]
pub struct AgentListItem {
    pub agent_id: AgentId,
    pub summary: String,
    /// Delegation targets, in declaration order
    pub delegations: Vec<AgentId>,
}

/// Result of agent show command.
#[derive(Debug, Clone)]
pub struct AgentShowResult {
    pub agent_id: AgentId,
    pub summary: String,
    pub origin: String,
    pub trigger_phrases: Vec<String>,
    pub delegations: Vec<Delegation>,
    pub body: Option<String>,
}

/// Result of match command.
#[derive(Debug, Clone)]
pub struct AgentMatchResult {
    pub query: String,
    pub matches: Vec<AgentMatchItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentMatchItem {
    pub agent_id: AgentId,
    pub score: Score,
    pub matched_terms: Vec<String>,
    pub matched_phrases: Vec<String>,
}

/// Result of resolve command.
#[derive(Debug, Clone)]
pub struct AgentResolveResult {
    pub source_agent_id: AgentId,
    pub trigger: String,
    pub resolution: Resolution,
}

/// Result of validate command.
#[derive(Debug, Clone)]
pub struct AgentValidateAllResult {
    pub results: Vec<ValidationResult>,
}

impl AgentValidateAllResult {
    pub fn valid_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_valid()).count()
    }

    pub fn all_valid(&self) -> bool {
        self.results.iter().all(|r| r.is_valid())
    }
}

impl AgentCommandService {
    /// List every agent in registry order.
    pub fn list(registry: &Registry) -> AgentListResult {
        let agents = registry
            .all()
            .iter()
            .map(|a| AgentListItem {
                agent_id: a.id.clone(),
                summary: a.summary.clone(),
                delegations: a.delegation_targets().into_iter().map(str::to_string).collect(),
            })
            .collect();
        AgentListResult { agents }
    }

    /// Show one agent; include_body controls whether the document body is returned.
    pub fn show(
        registry: &Registry,
        agent_id: &str,
        include_body: bool,
    ) -> Result<AgentShowResult, RosterError> {
        let AgentDescriptor {
            id,
            summary,
            trigger_phrases,
            delegations,
            origin,
            body,
        } = registry.get_or_error(agent_id)?.clone();
        Ok(AgentShowResult {
            agent_id: id,
            summary,
            origin,
            trigger_phrases,
            delegations,
            body: body.filter(|_| include_body),
        })
    }

    /// Rank agents for a task. `limit` overrides the configured limit when set.
    pub fn match_task(
        registry: &Registry,
        config: &MatcherConfig,
        task: &str,
        limit: Option<usize>,
    ) -> AgentMatchResult {
        let mut config = config.clone();
        if let Some(limit) = limit {
            config.limit = limit;
        }
        let matches = Matcher::with_config(registry, config)
            .rank(task)
            .into_iter()
            .map(|m| AgentMatchItem {
                agent_id: m.descriptor.id.clone(),
                score: m.score,
                matched_terms: m.matched_terms,
                matched_phrases: m.matched_phrases,
            })
            .collect();
        AgentMatchResult {
            query: task.to_string(),
            matches,
        }
    }

    /// Resolve a delegation from `source_agent_id` on `trigger`.
    pub fn resolve(
        registry: &Registry,
        source_agent_id: &str,
        trigger: &str,
        context: Option<&str>,
    ) -> Result<AgentResolveResult, RosterError> {
        let resolution =
            DelegationResolver::new(registry).resolve_with_context(source_agent_id, trigger, context)?;
        Ok(AgentResolveResult {
            source_agent_id: source_agent_id.to_string(),
            trigger: trigger.to_string(),
            resolution,
        })
    }

    /// Validate all agents.
    pub fn validate_all(registry: &Registry) -> AgentValidateAllResult {
        AgentValidateAllResult {
            results: registry.validate(),
        }
    }
}
