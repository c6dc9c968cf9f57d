//! CLI command handling

pub mod hook;

pub use hook::*;
