//! CLI command implementations

pub mod add;
pub mod lookup;
pub mod serve;
