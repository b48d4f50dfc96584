pub(crate) mod policy;
pub mod service;

pub(crate) use policy as merge_policy;
