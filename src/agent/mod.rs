//! Agent descriptors and the registry that holds them.
//!
//! Descriptors are loaded once from one or more [`DescriptorSource`]s and never
//! mutated afterwards. The command service exposes one method per CLI command.

pub mod commands;
pub mod domain;
mod registry;
pub mod source;

pub use commands::{
    AgentCommandService, AgentListItem, AgentListResult, AgentMatchItem, AgentMatchResult,
    AgentResolveResult, AgentShowResult, AgentValidateAllResult,
};
pub use domain::{AgentDescriptor, Delegation, DescriptorRecord, ValidationResult};
pub use registry::{Registry, RegistryLoader};
pub use source::{BuiltinSource, DescriptorSource, DirectorySource, InlineSource};
