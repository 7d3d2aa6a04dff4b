//! Acronym Store - Core Library
//!
//! The acronym table, its YAML document format, and the file-backed store
//! used by both the CLI and the web server.

pub mod error;
pub mod store;
pub mod types;

pub use error::*;
pub use store::*;
pub use types::*;
