//! Build mode selection.

use std::env;

/// Build mode for one plan assembly.
///
/// Any flag value other than `"production"` selects `Development`: an
/// unrecognized mode only skips the minification step, it never changes
/// output correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// Optimized distributable build
    Production,
    /// Fast, readable build
    #[default]
    Development,
}

impl BuildMode {
    /// Parse a mode from a flag value such as the contents of `NODE_ENV`.
    pub fn from_flag(flag: &str) -> Self {
        if flag == "production" {
            BuildMode::Production
        } else {
            BuildMode::Development
        }
    }

    /// Read the mode from the `NODE_ENV` environment variable.
    ///
    /// Convenience for callers keeping the historical env-driven
    /// behavior; the assembler itself takes the mode as an explicit
    /// argument and never reads the environment.
    pub fn from_env() -> Self {
        env::var("NODE_ENV").map(|value| Self::from_flag(&value)).unwrap_or_default()
    }

    /// Whether this mode is production.
    pub fn is_production(self) -> bool {
        matches!(self, BuildMode::Production)
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildMode::Production => write!(f, "production"),
            BuildMode::Development => write!(f, "development"),
        }
    }
}
