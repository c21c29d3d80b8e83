//! Package metadata loading.
//!
//! The plan embeds a handful of fields read from the library's
//! `package.json`: the name/version/author triple for the banner and the
//! `main`/`module` paths that name the UMD and ESM output files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Metadata loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MetadataError {
    /// File I/O error
    #[error("Failed to read package metadata: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error (including missing required fields)
    #[error("Failed to parse package.json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fields read from the library's `package.json`.
///
/// All five fields are required. A metadata file missing any of them
/// fails the whole assembly rather than producing a partial plan.
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageMetadata {
    /// Package name, embedded in the banner
    pub name: String,
    /// Version string, embedded verbatim in the banner
    pub version: String,
    /// Author line for the banner's copyright notice
    pub author: String,
    /// UMD output file (npm `main` field)
    pub main: PathBuf,
    /// ESM output file (npm `module` field)
    pub module: PathBuf,
}

/// Load package metadata from a `package.json` file.
///
/// # Example
/// ```ignore
/// let metadata = load_metadata(Path::new("package.json"))?;
/// println!("planning build for {} v{}", metadata.name, metadata.version);
/// ```
pub fn load_metadata(path: &Path) -> Result<PackageMetadata, MetadataError> {
    let contents = fs::read_to_string(path)?;
    let metadata = serde_json::from_str(&contents)?;
    Ok(metadata)
}
