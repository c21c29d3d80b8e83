//! Transform stages and the canonical chains.
//!
//! Stage ordering is significant: the dependency-resolution and
//! legacy-interop stages must run before the type-checked compilation,
//! and minification, when present, is always last.

use crate::mode::BuildMode;
use crate::plan::format::OutputFormat;
use crate::plan::output::OutputDescriptor;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One named transform applied during a build pass.
///
/// Serializes as `{"id": ..., ...options}`, the vocabulary the external
/// build engine consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "id")]
pub enum TransformStage {
    /// Embed imported JSON as a single default value
    #[serde(rename = "json")]
    JsonEmbed {
        /// Generate one named export per top-level JSON key. Off by
        /// default: keys are not guaranteed to be valid identifiers.
        named_exports: bool,
    },
    /// Resolve external package references to file paths using the
    /// host's module-resolution algorithm
    #[serde(rename = "node-resolve")]
    NodeResolve,
    /// Make CommonJS dependencies importable as ES modules
    #[serde(rename = "commonjs")]
    CommonJs,
    /// Type-checked TypeScript compilation
    #[serde(rename = "typescript")]
    TypeScript {
        /// Honor the declaration output directory from tsconfig
        use_tsconfig_declaration_dir: bool,
        /// On-disk cache shared across passes of one invocation
        #[serde(skip_serializing_if = "Option::is_none")]
        cache_root: Option<PathBuf>,
    },
    /// Minify the emitted bundle
    #[serde(rename = "minify")]
    Minify,
    /// Merge every type declaration reachable from the entry into one file
    #[serde(rename = "dts")]
    DeclarationBundle,
}

impl TransformStage {
    /// Engine-facing stage identifier.
    pub fn id(&self) -> &'static str {
        match self {
            TransformStage::JsonEmbed { .. } => "json",
            TransformStage::NodeResolve => "node-resolve",
            TransformStage::CommonJs => "commonjs",
            TransformStage::TypeScript { .. } => "typescript",
            TransformStage::Minify => "minify",
            TransformStage::DeclarationBundle => "dts",
        }
    }
}

impl std::fmt::Display for TransformStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// The canonical stage chain shared by every primary-library pass.
///
/// All passes of one invocation receive the same `cache_root` so the
/// type-checker cache built by the first pass is warm for the rest.
pub fn library_stages(cache_root: &Path) -> Vec<TransformStage> {
    vec![
        TransformStage::JsonEmbed { named_exports: false },
        TransformStage::NodeResolve,
        TransformStage::CommonJs,
        TransformStage::TypeScript {
            use_tsconfig_declaration_dir: true,
            cache_root: Some(cache_root.to_path_buf()),
        },
    ]
}

/// Stage chain for a primary-library pass, derived from the output
/// descriptor and build mode.
///
/// Minification is appended only for the production UMD output. ESM
/// consumers run their own minifiers, and mangling module-level bindings
/// here would defeat their tree-shaking; development builds of either
/// format stay readable.
pub fn stages_for(
    output: &OutputDescriptor,
    mode: BuildMode,
    cache_root: &Path,
) -> Vec<TransformStage> {
    let mut stages = library_stages(cache_root);
    if mode.is_production() && output.format == OutputFormat::Umd {
        stages.push(TransformStage::Minify);
    }
    stages
}

/// Stage chain for the framework-adapter pass.
///
/// The adapter imports no JSON and no CommonJS modules, so only the
/// compiler runs, with its default options.
pub fn adapter_stages() -> Vec<TransformStage> {
    vec![TransformStage::TypeScript { use_tsconfig_declaration_dir: false, cache_root: None }]
}

/// Check the ordering invariants of a stage chain.
///
/// Pre-compilation stages (`json`, `node-resolve`, `commonjs`) must come
/// before `typescript`; `minify` must be the final stage when present.
pub fn validate_chain(stages: &[TransformStage]) -> Result<(), String> {
    let compile_at =
        stages.iter().position(|stage| matches!(stage, TransformStage::TypeScript { .. }));

    for (index, stage) in stages.iter().enumerate() {
        match stage {
            TransformStage::JsonEmbed { .. }
            | TransformStage::NodeResolve
            | TransformStage::CommonJs => {
                if let Some(compile) = compile_at {
                    if index > compile {
                        return Err(format!("stage '{}' must precede 'typescript'", stage.id()));
                    }
                }
            }
            TransformStage::Minify => {
                if index != stages.len() - 1 {
                    return Err("'minify' must be the final stage".to_string());
                }
            }
            TransformStage::TypeScript { .. } | TransformStage::DeclarationBundle => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::output::OutputDescriptor;

    fn cache() -> PathBuf {
        PathBuf::from("node_modules/.rts2_cache")
    }

    #[test]
    fn test_library_stages_canonical_order() {
        let stages = library_stages(&cache());
        let ids: Vec<&str> = stages.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["json", "node-resolve", "commonjs", "typescript"]);
    }

    #[test]
    fn test_library_stages_share_cache_root() {
        let stages = library_stages(&cache());
        match stages.last().unwrap() {
            TransformStage::TypeScript { use_tsconfig_declaration_dir, cache_root } => {
                assert!(*use_tsconfig_declaration_dir);
                assert_eq!(cache_root.as_deref(), Some(cache().as_path()));
            }
            other => panic!("expected typescript stage, got {}", other),
        }
    }

    #[test]
    fn test_json_embed_disables_named_exports() {
        let stages = library_stages(&cache());
        assert_eq!(stages[0], TransformStage::JsonEmbed { named_exports: false });
    }

    #[test]
    fn test_stages_for_production_umd_appends_minify() {
        let umd = OutputDescriptor::umd(PathBuf::from("dist/lib.js"), "Lib".to_string());
        let stages = stages_for(&umd, BuildMode::Production, &cache());
        assert_eq!(stages.last().unwrap().id(), "minify");
        assert_eq!(stages.len(), 5);
    }

    #[test]
    fn test_stages_for_production_esm_no_minify() {
        let esm = OutputDescriptor::esm(PathBuf::from("dist/lib.esm.js"));
        let stages = stages_for(&esm, BuildMode::Production, &cache());
        assert_eq!(stages.last().unwrap().id(), "typescript");
    }

    #[test]
    fn test_stages_for_development_never_minifies() {
        let umd = OutputDescriptor::umd(PathBuf::from("dist/lib.js"), "Lib".to_string());
        let stages = stages_for(&umd, BuildMode::Development, &cache());
        assert_eq!(stages.last().unwrap().id(), "typescript");
    }

    #[test]
    fn test_adapter_stages_compiler_only() {
        let stages = adapter_stages();
        assert_eq!(stages.len(), 1);
        assert_eq!(
            stages[0],
            TransformStage::TypeScript { use_tsconfig_declaration_dir: false, cache_root: None }
        );
    }

    #[test]
    fn test_validate_chain_accepts_canonical_chains() {
        assert!(validate_chain(&library_stages(&cache())).is_ok());
        assert!(validate_chain(&adapter_stages()).is_ok());

        let umd = OutputDescriptor::umd(PathBuf::from("dist/lib.js"), "Lib".to_string());
        assert!(validate_chain(&stages_for(&umd, BuildMode::Production, &cache())).is_ok());
    }

    #[test]
    fn test_validate_chain_rejects_interop_after_compile() {
        let stages = vec![
            TransformStage::TypeScript { use_tsconfig_declaration_dir: true, cache_root: None },
            TransformStage::CommonJs,
        ];
        let err = validate_chain(&stages).unwrap_err();
        assert!(err.contains("commonjs"));
    }

    #[test]
    fn test_validate_chain_rejects_minify_not_last() {
        let stages = vec![
            TransformStage::Minify,
            TransformStage::TypeScript { use_tsconfig_declaration_dir: true, cache_root: None },
        ];
        let err = validate_chain(&stages).unwrap_err();
        assert!(err.contains("minify"));
    }

    #[test]
    fn test_stage_serialization_vocabulary() {
        let json = serde_json::to_value(TransformStage::JsonEmbed { named_exports: false }).unwrap();
        assert_eq!(json["id"], "json");
        assert_eq!(json["named_exports"], false);

        let json = serde_json::to_value(TransformStage::NodeResolve).unwrap();
        assert_eq!(json["id"], "node-resolve");

        let json = serde_json::to_value(TransformStage::TypeScript {
            use_tsconfig_declaration_dir: true,
            cache_root: Some(PathBuf::from(".cache")),
        })
        .unwrap();
        assert_eq!(json["id"], "typescript");
        assert_eq!(json["cache_root"], ".cache");
    }
}
