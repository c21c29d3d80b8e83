//! Output descriptors for distributable artifacts.
//!
//! A descriptor is purely declarative: it names the format, the output
//! file, and the format-specific trimmings (exposed global name,
//! external-global bindings, banner comment). Deciding what to do with
//! a descriptor belongs to the stage chain and the assembler.

use crate::config::LibraryConfig;
use crate::metadata::PackageMetadata;
use crate::plan::format::OutputFormat;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Description of one distributable artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputDescriptor {
    /// Module format
    pub format: OutputFormat,
    /// Output file path
    pub file: PathBuf,
    /// Global variable name the artifact exposes (UMD only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Global variable names used for externalized imports (UMD only)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub globals: BTreeMap<String, String>,
    /// Comment block emitted verbatim at the top of the artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
}

impl OutputDescriptor {
    /// Create a UMD descriptor exposing `name`.
    pub fn umd(file: PathBuf, name: String) -> Self {
        Self {
            format: OutputFormat::Umd,
            file,
            name: Some(name),
            globals: BTreeMap::new(),
            banner: None,
        }
    }

    /// Create an ES-module descriptor.
    pub fn esm(file: PathBuf) -> Self {
        Self { format: OutputFormat::Esm, file, name: None, globals: BTreeMap::new(), banner: None }
    }

    /// Attach a banner comment.
    pub fn with_banner(mut self, banner: String) -> Self {
        self.banner = Some(banner);
        self
    }

    /// Attach external-import global bindings.
    pub fn with_globals(mut self, globals: BTreeMap<String, String>) -> Self {
        self.globals = globals;
        self
    }

    /// Check the format invariants for this descriptor.
    ///
    /// A UMD artifact must expose a non-empty global name; an ES-module
    /// artifact must not carry one.
    pub fn validate(&self) -> Result<(), String> {
        match (self.format, self.name.as_deref()) {
            (OutputFormat::Umd, None | Some("")) => {
                Err("umd output requires a global name".to_string())
            }
            (OutputFormat::Esm, Some(_)) => {
                Err("es output must not carry a global name".to_string())
            }
            _ => Ok(()),
        }
    }
}

/// The descriptor set for the primary library.
///
/// Exactly one UMD variant (exposed global name, banner) and one
/// ES-module variant (banner only), in that order. Purely declarative;
/// adding a format here needs no change downstream.
pub fn primary_outputs(
    metadata: &PackageMetadata,
    library: &LibraryConfig,
    banner: &str,
) -> Vec<OutputDescriptor> {
    vec![
        OutputDescriptor::umd(metadata.main.clone(), library.global_name.clone())
            .with_banner(banner.to_string()),
        OutputDescriptor::esm(metadata.module.clone()).with_banner(banner.to_string()),
    ]
}
