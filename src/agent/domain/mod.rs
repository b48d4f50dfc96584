pub mod descriptor;
pub mod record;
pub mod validation;

pub use descriptor::{AgentDescriptor, Delegation, DEFAULT_HANDOFF_TEMPLATE};
pub use record::{DelegationRecord, DescriptorRecord};
pub use validation::{validate_descriptor, ValidationResult};
