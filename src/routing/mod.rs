//! Routing: pick an agent for a task and follow declared handoffs.

pub mod delegation;
pub mod matcher;
pub mod template;
pub mod tokenizer;

pub use delegation::{DelegationResolver, HandoffPayload, Resolution};
pub use matcher::{MatchResult, Matcher};
