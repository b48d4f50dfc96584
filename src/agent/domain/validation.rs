//! Descriptor validation owned by the agent domain.

use super::descriptor::AgentDescriptor;
use crate::routing::template::unknown_placeholders;
use serde::Serialize;

/// Validation result for one agent descriptor
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub agent_id: String,
    pub checks: Vec<(String, bool)>,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn new(agent_id: String) -> Self {
        Self {
            agent_id,
            checks: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn add_check(&mut self, description: &str, passed: bool) {
        self.checks.push((description.to_string(), passed));
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.checks.iter().all(|(_, passed)| *passed)
    }

    pub fn total_checks(&self) -> usize {
        self.checks.len()
    }

    pub fn passed_checks(&self) -> usize {
        self.checks.iter().filter(|(_, passed)| *passed).count()
    }
}

/// Check one descriptor against the set of ids known to the registry.
pub fn validate_descriptor(
    descriptor: &AgentDescriptor,
    is_registered: impl Fn(&str) -> bool,
) -> ValidationResult {
    let mut result = ValidationResult::new(descriptor.id.clone());

    result.add_check("Summary present", !descriptor.summary.trim().is_empty());

    if descriptor.trigger_phrases.is_empty() {
        result.add_error("No trigger phrases; matching relies on the summary alone".to_string());
    } else {
        result.add_check("Trigger phrases present", true);
    }

    for delegation in &descriptor.delegations {
        let target = &delegation.target_agent_id;
        if target == &descriptor.id {
            result.add_error(format!(
                "Delegation '{}' targets the agent itself",
                delegation.trigger_condition
            ));
            continue;
        }
        if is_registered(target) {
            result.add_check(&format!("Delegation target '{}' exists", target), true);
        } else {
            result.add_error(format!(
                "Delegation '{}' targets unknown agent '{}'",
                delegation.trigger_condition, target
            ));
        }

        let unknown = unknown_placeholders(&delegation.handoff_template);
        if !unknown.is_empty() {
            result.add_error(format!(
                "Handoff template for '{}' uses unknown placeholder(s): {}",
                delegation.trigger_condition,
                unknown.join(", ")
            ));
        }
    }

    result
}
