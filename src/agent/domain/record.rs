//! Raw descriptor records as they appear in persona documents, before validation.

use super::descriptor::{AgentDescriptor, Delegation};
use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};

/// Delegation entry as written in front-matter or TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationRecord {
    #[serde(default, alias = "when", alias = "trigger_condition", alias = "condition")]
    pub trigger: Option<String>,

    #[serde(default, alias = "agent", alias = "target_agent_id")]
    pub target: Option<String>,

    #[serde(default, alias = "template", alias = "handoff_template")]
    pub handoff: Option<String>,
}

/// Descriptor definition with every field optional so missing data can be
/// reported as a malformed descriptor instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorRecord {
    #[serde(default, alias = "name")]
    pub id: Option<String>,

    #[serde(default, alias = "description")]
    pub summary: Option<String>,

    #[serde(default, alias = "examples", alias = "trigger_phrases")]
    pub triggers: Vec<String>,

    #[serde(default)]
    pub delegations: Vec<DelegationRecord>,

    /// Markdown body following the front-matter
    #[serde(skip)]
    pub body: Option<String>,

    /// Location label used in errors and listings
    #[serde(skip)]
    pub origin: String,
}

impl DescriptorRecord {
    /// Validate required fields and build the immutable descriptor.
    pub fn into_descriptor(self) -> Result<AgentDescriptor> {
        self.into_descriptor_labeled("<unknown>")
    }

    /// Like [`into_descriptor`](Self::into_descriptor), naming the record
    /// `label` in errors when it carries no origin of its own. The
    /// descriptor keeps the record's origin as given.
    pub fn into_descriptor_labeled(self, label: &str) -> Result<AgentDescriptor> {
        let origin = if self.origin.is_empty() {
            label.to_string()
        } else {
            self.origin.clone()
        };

        let id = required(self.id, &origin, "id")?;
        if id.chars().any(char::is_whitespace) {
            return Err(RosterError::malformed(
                &origin,
                format!("agent id '{}' must not contain whitespace", id),
            ));
        }
        let summary = required(self.summary, &origin, "summary")?;

        let mut descriptor = AgentDescriptor::new(id, summary);
        descriptor.origin = self.origin;
        descriptor.body = self.body.filter(|b| !b.trim().is_empty());

        for phrase in self.triggers {
            descriptor.push_trigger(phrase);
        }

        for (index, record) in self.delegations.into_iter().enumerate() {
            let trigger = record.trigger.filter(|t| !t.trim().is_empty()).ok_or_else(|| {
                RosterError::malformed(
                    &origin,
                    format!("delegation #{} is missing its trigger condition", index + 1),
                )
            })?;
            let target = record.target.filter(|t| !t.trim().is_empty()).ok_or_else(|| {
                RosterError::malformed(
                    &origin,
                    format!("delegation #{} is missing its target agent", index + 1),
                )
            })?;
            descriptor.push_delegation(Delegation::new(
                trigger.trim(),
                target.trim(),
                record.handoff,
            ));
        }

        Ok(descriptor)
    }
}

impl From<AgentDescriptor> for DescriptorRecord {
    fn from(descriptor: AgentDescriptor) -> Self {
        Self {
            id: Some(descriptor.id),
            summary: Some(descriptor.summary),
            triggers: descriptor.trigger_phrases,
            delegations: descriptor
                .delegations
                .into_iter()
                .map(|d| DelegationRecord {
                    trigger: Some(d.trigger_condition),
                    target: Some(d.target_agent_id),
                    handoff: Some(d.handoff_template),
                })
                .collect(),
            body: descriptor.body,
            origin: descriptor.origin,
        }
    }
}

fn required(value: Option<String>, origin: &str, field: &str) -> Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(RosterError::malformed(
            origin,
            format!("missing required field '{}'", field),
        )),
    }
}
