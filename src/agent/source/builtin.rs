//! Persona documents compiled into the binary.

use super::contract::DescriptorSource;
use super::document::{parse_document, DocumentFormat};
use crate::agent::domain::DescriptorRecord;
use crate::error::Result;

const BUILTIN_AGENTS: &[(&str, &str)] = &[
    (
        "dotnet-core-architect",
        include_str!("../../../agents/dotnet-core-architect.md"),
    ),
    ("efcore-expert", include_str!("../../../agents/efcore-expert.md")),
    (
        "sql-server-expert",
        include_str!("../../../agents/sql-server-expert.md"),
    ),
    ("postgres-expert", include_str!("../../../agents/postgres-expert.md")),
];

/// The default persona set shipped with roster.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl BuiltinSource {
    pub fn new() -> Self {
        Self
    }

    /// Names of the shipped documents, in load order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        BUILTIN_AGENTS.iter().map(|(name, _)| *name)
    }
}

impl DescriptorSource for BuiltinSource {
    fn name(&self) -> String {
        "builtin".to_string()
    }

    fn load(&self) -> Result<Vec<DescriptorRecord>> {
        BUILTIN_AGENTS
            .iter()
            .map(|(name, content)| {
                parse_document(content, DocumentFormat::Markdown, &format!("builtin:{}", name))
            })
            .collect()
    }
}
