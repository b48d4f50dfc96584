//! AgentDescriptor: the immutable record for one persona.

use crate::types::AgentId;
use serde::Serialize;

/// Template used when a delegation declares no handoff text of its own.
pub const DEFAULT_HANDOFF_TEMPLATE: &str = "Hand off to {target}: {condition}";

/// A declared handoff from one agent to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delegation {
    /// Described condition under which the handoff applies (e.g. "data layer implementation")
    pub trigger_condition: String,
    /// Id of the agent that receives the work
    pub target_agent_id: AgentId,
    /// Handoff text with `{source}`, `{target}`, `{condition}`, `{trigger}`, `{context}` placeholders
    pub handoff_template: String,
}

impl Delegation {
    pub fn new(
        trigger_condition: impl Into<String>,
        target_agent_id: impl Into<String>,
        handoff_template: Option<String>,
    ) -> Self {
        Self {
            trigger_condition: trigger_condition.into(),
            target_agent_id: target_agent_id.into(),
            handoff_template: handoff_template
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_HANDOFF_TEMPLATE.to_string()),
        }
    }

    fn same_route(&self, other: &Delegation) -> bool {
        self.target_agent_id == other.target_agent_id
            && self.trigger_condition.eq_ignore_ascii_case(&other.trigger_condition)
    }
}

/// Static persona record held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentDescriptor {
    /// Unique identifier
    pub id: AgentId,
    /// Short free-text description of expertise
    pub summary: String,
    /// Example user requests, in declaration order
    pub trigger_phrases: Vec<String>,
    /// Declared handoffs, in declaration order, without duplicate routes
    pub delegations: Vec<Delegation>,
    /// Where the definition came from (file path or `builtin:<name>`); empty for inline records
    pub origin: String,
    /// Markdown body of the persona document, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl AgentDescriptor {
    pub fn new(id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            trigger_phrases: Vec::new(),
            delegations: Vec::new(),
            origin: String::new(),
            body: None,
        }
    }

    pub fn with_trigger(mut self, phrase: impl Into<String>) -> Self {
        self.push_trigger(phrase.into());
        self
    }

    pub fn with_delegation(mut self, delegation: Delegation) -> Self {
        self.push_delegation(delegation);
        self
    }

    /// Append a trigger phrase unless an equal one (ignoring case) is already present.
    pub(crate) fn push_trigger(&mut self, phrase: String) {
        let phrase = phrase.trim().to_string();
        if phrase.is_empty() {
            return;
        }
        if !self
            .trigger_phrases
            .iter()
            .any(|p| p.eq_ignore_ascii_case(&phrase))
        {
            self.trigger_phrases.push(phrase);
        }
    }

    /// Append a delegation unless the same route is already declared.
    pub(crate) fn push_delegation(&mut self, delegation: Delegation) {
        if !self.delegations.iter().any(|d| d.same_route(&delegation)) {
            self.delegations.push(delegation);
        }
    }

    /// Ids of every agent this one may hand off to, in declaration order.
    pub fn delegation_targets(&self) -> Vec<&str> {
        let mut targets: Vec<&str> = Vec::new();
        for d in &self.delegations {
            if !targets.contains(&d.target_agent_id.as_str()) {
                targets.push(&d.target_agent_id);
            }
        }
        targets
    }
}
