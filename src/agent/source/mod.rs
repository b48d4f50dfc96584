//! Descriptor source port and adapters.

pub mod builtin;
pub mod contract;
pub mod directory;
pub mod document;

pub use builtin::BuiltinSource;
pub use contract::{DescriptorSource, InlineSource};
pub use directory::{resolve_source_path, DirectorySource};
pub use document::{parse_document, DocumentFormat};
