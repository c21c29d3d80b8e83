//! Bundle configuration for the build-plan assembler
//!
//! Provides types and parsing for `bundle.toml` project configuration.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
