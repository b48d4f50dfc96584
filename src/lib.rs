//! Roster: Agent Registry & Router
//!
//! Loads persona descriptors into an immutable registry, ranks them for a
//! free-text task by keyword overlap, and resolves declared delegations into
//! handoff payloads.

pub mod agent;
pub mod config;
pub mod error;
pub mod logging;
pub mod routing;
pub mod tooling;
pub mod types;

pub use agent::{AgentDescriptor, Delegation, Registry, RegistryLoader};
pub use error::{Result, RosterError};
pub use routing::{DelegationResolver, HandoffPayload, MatchResult, Matcher, Resolution};
