//! Agent registry: the immutable, insertion-ordered set of loaded descriptors.

use crate::agent::domain::{validate_descriptor, AgentDescriptor, ValidationResult};
use crate::agent::source::{
    resolve_source_path, BuiltinSource, DescriptorSource, DirectorySource, InlineSource,
};
use crate::config::{Integrity, RegistryConfig};
use crate::error::{Result, RosterError};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Immutable registry of agent descriptors.
///
/// Built once by [`Registry::load`] or [`RegistryLoader`]; no mutating API.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    agents: Vec<AgentDescriptor>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Load a registry from a single source with strict referential integrity.
    pub fn load(source: &dyn DescriptorSource) -> Result<Self> {
        build(&[source], Integrity::Strict, &[])
    }

    /// Build a registry from descriptors constructed in code.
    pub fn from_descriptors(descriptors: Vec<AgentDescriptor>) -> Result<Self> {
        Self::load(&InlineSource::from_descriptors(descriptors))
    }

    /// Exact lookup by id
    pub fn get(&self, agent_id: &str) -> Option<&AgentDescriptor> {
        self.index.get(agent_id).map(|&i| &self.agents[i])
    }

    /// Exact lookup by id, `UnknownAgent` when absent
    pub fn get_or_error(&self, agent_id: &str) -> Result<&AgentDescriptor> {
        self.get(agent_id)
            .ok_or_else(|| RosterError::UnknownAgent(agent_id.to_string()))
    }

    /// All descriptors in insertion order
    pub fn all(&self) -> &[AgentDescriptor] {
        &self.agents
    }

    pub fn contains(&self, agent_id: &str) -> bool {
        self.index.contains_key(agent_id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.agents.iter().map(|a| a.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Validate one registered agent.
    pub fn validate_agent(&self, agent_id: &str) -> ValidationResult {
        match self.get(agent_id) {
            Some(descriptor) => validate_descriptor(descriptor, |id| self.contains(id)),
            None => {
                let mut result = ValidationResult::new(agent_id.to_string());
                result.add_error("Agent not found in registry".to_string());
                result
            }
        }
    }

    /// Validate every agent, in insertion order.
    pub fn validate(&self) -> Vec<ValidationResult> {
        self.agents
            .iter()
            .map(|d| validate_descriptor(d, |id| self.contains(id)))
            .collect()
    }
}

/// Composes several sources into one registry.
///
/// Sources are applied in the order added; an id defined by a later source
/// replaces the earlier definition in place. A duplicate id within one source
/// is an error.
pub struct RegistryLoader {
    sources: Vec<Box<dyn DescriptorSource>>,
    integrity: Integrity,
    only: Vec<String>,
}

impl RegistryLoader {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            integrity: Integrity::Strict,
            only: Vec::new(),
        }
    }

    /// Loader for the configured sources: builtin set, the user agents
    /// directory, configured paths resolved against `workspace_root`, then
    /// `extra_dirs`.
    pub fn from_config(
        config: &RegistryConfig,
        workspace_root: &Path,
        extra_dirs: &[PathBuf],
    ) -> Result<Self> {
        let mut loader = Self::new()
            .integrity(config.integrity)
            .only(config.only.clone());

        if config.include_builtin {
            loader = loader.with_source(BuiltinSource::new());
        }
        if config.include_user_agents {
            loader = loader.with_source(DirectorySource::new(crate::config::xdg::agents_dir()?));
        }
        for path in &config.paths {
            let resolved = resolve_source_path(path, workspace_root)?;
            loader = loader.with_source(DirectorySource::new(resolved));
        }
        for dir in extra_dirs {
            loader = loader.with_source(DirectorySource::new(dir.clone()));
        }
        Ok(loader)
    }

    pub fn with_source(mut self, source: impl DescriptorSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn integrity(mut self, integrity: Integrity) -> Self {
        self.integrity = integrity;
        self
    }

    /// Restrict the registry to these ids (empty keeps everything).
    pub fn only(mut self, ids: Vec<String>) -> Self {
        self.only = ids;
        self
    }

    pub fn source_names(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn load(&self) -> Result<Registry> {
        let sources: Vec<&dyn DescriptorSource> = self.sources.iter().map(|s| s.as_ref()).collect();
        build(&sources, self.integrity, &self.only)
    }
}

impl Default for RegistryLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn build(
    sources: &[&dyn DescriptorSource],
    integrity: Integrity,
    only: &[String],
) -> Result<Registry> {
    let mut agents: Vec<AgentDescriptor> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for source in sources {
        let source_name = source.name();
        let mut seen: HashSet<String> = HashSet::new();

        for (position, record) in source.load()?.into_iter().enumerate() {
            let descriptor =
                record.into_descriptor_labeled(&format!("{}:{}", source_name, position))?;
            if !seen.insert(descriptor.id.clone()) {
                return Err(RosterError::DuplicateAgent {
                    agent_id: descriptor.id,
                    origin: source_name,
                });
            }

            match index.get(&descriptor.id) {
                Some(&position) => {
                    info!(
                        agent_id = %descriptor.id,
                        previous = %agents[position].origin,
                        origin = %descriptor.origin,
                        "Agent definition overridden"
                    );
                    agents[position] = descriptor;
                }
                None => {
                    debug!(agent_id = %descriptor.id, origin = %descriptor.origin, "Registered agent");
                    index.insert(descriptor.id.clone(), agents.len());
                    agents.push(descriptor);
                }
            }
        }
    }

    if !only.is_empty() {
        for id in only {
            if !index.contains_key(id) {
                warn!(agent_id = %id, "Team member not found in any agent source");
            }
        }
        agents.retain(|a| only.contains(&a.id));
        index = agents
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id.clone(), i))
            .collect();
    }

    for descriptor in &agents {
        for target in descriptor.delegation_targets() {
            if index.contains_key(target) {
                continue;
            }
            match integrity {
                Integrity::Strict => {
                    return Err(RosterError::DanglingDelegation {
                        source_agent_id: descriptor.id.clone(),
                        target_agent_id: target.to_string(),
                    });
                }
                Integrity::Warn => warn!(
                    source_agent_id = %descriptor.id,
                    target_agent_id = %target,
                    "Delegation targets an agent that is not registered"
                ),
            }
        }
    }

    info!(count = agents.len(), sources = sources.len(), "Agent registry loaded");
    Ok(Registry { agents, index })
}
