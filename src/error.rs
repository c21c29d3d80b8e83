//! Crate-level error type for plan assembly.

use thiserror::Error;

/// Error produced while assembling a build plan.
///
/// Assembly either yields a complete, validated plan or fails as a
/// whole; there is no partial plan to recover.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlanError {
    /// Package metadata could not be loaded
    #[error(transparent)]
    Metadata(#[from] crate::metadata::MetadataError),
    /// Bundle configuration could not be loaded
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
    /// An output descriptor violates its format invariants
    #[error("invalid output descriptor for {file}: {message}")]
    InvalidDescriptor {
        /// Output file the descriptor points at
        file: String,
        /// What the descriptor got wrong
        message: String,
    },
    /// A stage chain violates the canonical ordering
    #[error("invalid stage order in pass for {entry}: {message}")]
    InvalidStageOrder {
        /// Entry module of the offending pass
        entry: String,
        /// Which ordering rule was broken
        message: String,
    },
}
