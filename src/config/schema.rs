//! Configuration schema types for `bundle.toml`
//!
//! The fixed paths and names the plan embeds - library entry point,
//! exposed global names, compiler cache root, the adapter's descriptor
//! set, and the declaration output - are declarative data with defaults
//! matching the published build. A project only writes a `bundle.toml`
//! to override them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Primary library settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Entry module for every primary-library pass
    #[serde(default = "default_library_entry")]
    pub entry: PathBuf,
    /// Global variable name exposed by the UMD build
    #[serde(default = "default_library_global")]
    pub global_name: String,
    /// On-disk cache directory for the type-checked compilation stage.
    /// Shared by all passes of one invocation so later passes reuse the
    /// first pass's type-check work.
    #[serde(default = "default_cache_root")]
    pub cache_root: PathBuf,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            entry: default_library_entry(),
            global_name: default_library_global(),
            cache_root: default_cache_root(),
        }
    }
}

fn default_library_entry() -> PathBuf {
    PathBuf::from("src/index.ts")
}

fn default_library_global() -> String {
    "UnityWebgl".to_string()
}

fn default_cache_root() -> PathBuf {
    PathBuf::from("node_modules/.rts2_cache")
}

/// Framework-adapter settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Entry module for the adapter pass
    #[serde(default = "default_adapter_entry")]
    pub entry: PathBuf,
    /// Global variable name exposed by the adapter UMD build
    #[serde(default = "default_adapter_global")]
    pub global_name: String,
    /// ESM output file
    #[serde(default = "default_adapter_esm_file")]
    pub esm_file: PathBuf,
    /// UMD output file
    #[serde(default = "default_adapter_umd_file")]
    pub umd_file: PathBuf,
    /// Module ids never inlined into the adapter bundle; the host
    /// application supplies its own copy at runtime
    #[serde(default = "default_adapter_external")]
    pub external: Vec<String>,
    /// Global variable names the UMD build reads externalized imports from
    #[serde(default = "default_adapter_globals")]
    pub globals: BTreeMap<String, String>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            entry: default_adapter_entry(),
            global_name: default_adapter_global(),
            esm_file: default_adapter_esm_file(),
            umd_file: default_adapter_umd_file(),
            external: default_adapter_external(),
            globals: default_adapter_globals(),
        }
    }
}

fn default_adapter_entry() -> PathBuf {
    PathBuf::from("src/vue/index.ts")
}

fn default_adapter_global() -> String {
    "VueUnity".to_string()
}

fn default_adapter_esm_file() -> PathBuf {
    PathBuf::from("dist/VueUnity.esm.js")
}

fn default_adapter_umd_file() -> PathBuf {
    PathBuf::from("dist/VueUnity.min.js")
}

fn default_adapter_external() -> Vec<String> {
    vec!["vue-demi".to_string()]
}

fn default_adapter_globals() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("vue".to_string(), "Vue".to_string()),
        ("vue-demi".to_string(), "VueDemi".to_string()),
    ])
}

/// Declaration-bundling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclarationsConfig {
    /// Merged declaration output file
    #[serde(default = "default_declarations_file")]
    pub file: PathBuf,
}

impl Default for DeclarationsConfig {
    fn default() -> Self {
        Self { file: default_declarations_file() }
    }
}

fn default_declarations_file() -> PathBuf {
    PathBuf::from("dist/index.d.ts")
}

/// Root configuration loaded from `bundle.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BundleConfig {
    /// Primary library section
    #[serde(default)]
    pub library: LibraryConfig,
    /// Framework adapter section
    #[serde(default)]
    pub adapter: AdapterConfig,
    /// Declaration output section
    #[serde(default)]
    pub declarations: DeclarationsConfig,
}

impl BundleConfig {
    /// Validate the configuration.
    ///
    /// Returns all problems found rather than stopping at the first.
    /// Checks the invariants the descriptor set relies on: exposed
    /// global names must be non-empty, and every externalized module id
    /// needs a global-variable binding for the UMD build to reference
    /// at runtime.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.library.global_name.is_empty() {
            errors.push("library.global_name must not be empty".to_string());
        }

        if self.adapter.global_name.is_empty() {
            errors.push("adapter.global_name must not be empty".to_string());
        }

        for id in &self.adapter.external {
            if !self.adapter.globals.contains_key(id) {
                errors.push(format!(
                    "adapter.external module '{}' has no adapter.globals binding",
                    id
                ));
            }
        }

        if self.adapter.esm_file == self.adapter.umd_file {
            errors.push("adapter.esm_file and adapter.umd_file must differ".to_string());
        }

        if self.declarations.file.as_os_str().is_empty() {
            errors.push("declarations.file must not be empty".to_string());
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BundleConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_library_section() {
        let config = BundleConfig::default();
        assert_eq!(config.library.entry, PathBuf::from("src/index.ts"));
        assert_eq!(config.library.global_name, "UnityWebgl");
        assert_eq!(config.library.cache_root, PathBuf::from("node_modules/.rts2_cache"));
    }

    #[test]
    fn test_default_adapter_section() {
        let config = BundleConfig::default();
        assert_eq!(config.adapter.entry, PathBuf::from("src/vue/index.ts"));
        assert_eq!(config.adapter.global_name, "VueUnity");
        assert_eq!(config.adapter.external, vec!["vue-demi".to_string()]);
        assert_eq!(config.adapter.globals.get("vue").unwrap(), "Vue");
        assert_eq!(config.adapter.globals.get("vue-demi").unwrap(), "VueDemi");
    }

    #[test]
    fn test_empty_global_name_rejected() {
        let mut config = BundleConfig::default();
        config.library.global_name = String::new();

        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("library.global_name"));
    }

    #[test]
    fn test_unbound_external_rejected() {
        let mut config = BundleConfig::default();
        config.adapter.external.push("pinia".to_string());

        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("pinia"));
    }

    #[test]
    fn test_partial_toml_merges_over_defaults() {
        let config: BundleConfig = toml::from_str(
            r#"
            [library]
            global_name = "MyLib"
            "#,
        )
        .unwrap();

        assert_eq!(config.library.global_name, "MyLib");
        // Untouched keys keep their defaults
        assert_eq!(config.library.entry, PathBuf::from("src/index.ts"));
        assert_eq!(config.adapter.global_name, "VueUnity");
    }

    #[test]
    fn test_adapter_globals_from_toml() {
        let config: BundleConfig = toml::from_str(
            r#"
            [adapter]
            external = ["react"]

            [adapter.globals]
            react = "React"
            "#,
        )
        .unwrap();

        assert!(config.validate().is_empty());
        assert_eq!(config.adapter.globals.get("react").unwrap(), "React");
    }
}
