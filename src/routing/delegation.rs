//! Delegation resolution: turn "source agent wants to hand off on this trigger"
//! into a concrete target and filled handoff text.

use crate::agent::{Delegation, Registry};
use crate::error::{Result, RosterError};
use crate::routing::template::{render, HandoffVars};
use crate::routing::tokenizer::{tokens, word_set};
use crate::types::AgentId;
use serde::Serialize;
use tracing::{debug, info};

/// Payload handed to the target agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandoffPayload {
    pub source_agent_id: AgentId,
    pub target_agent_id: AgentId,
    pub trigger_condition: String,
    pub handoff_text: String,
}

/// Outcome of a resolution. Having no matching delegation is a normal result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Handoff(HandoffPayload),
    NoDelegationFound,
}

impl Resolution {
    pub fn payload(&self) -> Option<&HandoffPayload> {
        match self {
            Resolution::Handoff(payload) => Some(payload),
            Resolution::NoDelegationFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Handoff(_))
    }
}

/// Resolves declared delegations against an immutable registry.
pub struct DelegationResolver<'a> {
    registry: &'a Registry,
}

/// A trigger keyword matches a condition when every keyword token is among
/// the condition's tokens, in any order.
fn trigger_matches(condition: &str, keyword: &str) -> bool {
    let keyword_tokens = tokens(keyword);
    if keyword_tokens.is_empty() {
        return false;
    }
    let condition_words = word_set(condition);
    keyword_tokens.iter().all(|k| condition_words.contains(k))
}

impl<'a> DelegationResolver<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// First delegation of `source_agent_id` whose condition matches `trigger`.
    pub fn find(&self, source_agent_id: &str, trigger: &str) -> Result<Option<&'a Delegation>> {
        let source = self.registry.get_or_error(source_agent_id)?;
        Ok(source
            .delegations
            .iter()
            .find(|d| trigger_matches(&d.trigger_condition, trigger)))
    }

    /// Resolve a handoff from `source_agent_id` for `trigger`.
    pub fn resolve(&self, source_agent_id: &str, trigger: &str) -> Result<Resolution> {
        self.resolve_with_context(source_agent_id, trigger, None)
    }

    /// Resolve a handoff, filling `{context}` with the supplied text.
    pub fn resolve_with_context(
        &self,
        source_agent_id: &str,
        trigger: &str,
        context: Option<&str>,
    ) -> Result<Resolution> {
        let Some(delegation) = self.find(source_agent_id, trigger)? else {
            debug!(source_agent_id, trigger, "No delegation matched");
            return Ok(Resolution::NoDelegationFound);
        };

        // Only reachable for dangling targets loaded in warn mode
        if !self.registry.contains(&delegation.target_agent_id) {
            return Err(RosterError::UnknownAgent(delegation.target_agent_id.clone()));
        }

        let handoff_text = render(
            &delegation.handoff_template,
            &HandoffVars {
                source: source_agent_id,
                target: &delegation.target_agent_id,
                condition: &delegation.trigger_condition,
                trigger: trigger.trim(),
                context: context.unwrap_or_default(),
            },
        );

        info!(
            source_agent_id,
            target_agent_id = %delegation.target_agent_id,
            condition = %delegation.trigger_condition,
            "Resolved delegation"
        );

        Ok(Resolution::Handoff(HandoffPayload {
            source_agent_id: source_agent_id.to_string(),
            target_agent_id: delegation.target_agent_id.clone(),
            trigger_condition: delegation.trigger_condition.clone(),
            handoff_text,
        }))
    }
}
