//! Output format identifiers.

use serde::{Deserialize, Serialize};

/// Module format of a distributable artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Universal module definition: loadable via script tag, CommonJS
    /// require, or AMD, without a separate bundler
    #[serde(rename = "umd")]
    Umd,
    /// ES module: static import/export, tree-shakeable by downstream
    /// bundlers
    #[serde(rename = "es")]
    Esm,
}

impl OutputFormat {
    /// Engine-facing format identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Umd => "umd",
            OutputFormat::Esm => "es",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
