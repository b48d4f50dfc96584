//! Core types shared across the registry, matcher, and resolver.

/// AgentId: unique identifier of a persona (e.g. `dotnet-core-architect`)
pub type AgentId = String;

/// Score: relevance of a descriptor for a task, higher is better
pub type Score = u32;
