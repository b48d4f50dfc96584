use crate::agent::domain::{AgentDescriptor, DescriptorRecord};
use crate::error::Result;

/// Port for anything that yields raw descriptor definitions.
///
/// Records come back in a stable order; the registry keeps that order.
pub trait DescriptorSource: Send + Sync {
    /// Label used in logs and override messages.
    fn name(&self) -> String;

    fn load(&self) -> Result<Vec<DescriptorRecord>>;
}

/// Records supplied directly by the caller.
#[derive(Debug, Clone, Default)]
pub struct InlineSource {
    records: Vec<DescriptorRecord>,
}

impl InlineSource {
    pub fn new(records: Vec<DescriptorRecord>) -> Self {
        Self { records }
    }

    /// Build from already-constructed descriptors.
    pub fn from_descriptors(descriptors: Vec<AgentDescriptor>) -> Self {
        let records = descriptors.into_iter().map(DescriptorRecord::from).collect();
        Self { records }
    }
}

impl DescriptorSource for InlineSource {
    fn name(&self) -> String {
        "inline".to_string()
    }

    fn load(&self) -> Result<Vec<DescriptorRecord>> {
        Ok(self.records.clone())
    }
}
