//! CLI command implementations.

pub(crate) mod estimate;
pub(crate) mod quote;
pub(crate) mod services;
