//! Build passes and the assembled plan.

use crate::error::PlanError;
use crate::plan::output::OutputDescriptor;
use crate::plan::stage::{validate_chain, TransformStage};
use serde::Serialize;
use std::path::PathBuf;

/// One invocation of the transform chain over a single entry module.
///
/// Constructed once at plan-assembly time and immutable afterwards; the
/// external build engine consumes each pass exactly once. A pass
/// usually produces one artifact; the adapter pass produces two from
/// the same entry.
#[derive(Debug, Clone, Serialize)]
pub struct BuildPass {
    /// Entry module path
    pub entry: PathBuf,
    /// Artifacts produced from this entry
    pub outputs: Vec<OutputDescriptor>,
    /// Ordered transform chain
    pub stages: Vec<TransformStage>,
    /// Module ids left un-bundled; the host application supplies them
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub external: Vec<String>,
}

impl BuildPass {
    /// Create a new build pass with no externalized modules.
    pub fn new(
        entry: PathBuf,
        outputs: Vec<OutputDescriptor>,
        stages: Vec<TransformStage>,
    ) -> Self {
        Self { entry, outputs, stages, external: vec![] }
    }

    /// Mark module ids as external to this pass.
    pub fn with_external(mut self, external: Vec<String>) -> Self {
        self.external = external;
        self
    }

    /// Validate descriptor and stage-order invariants for this pass.
    pub fn validate(&self) -> Result<(), PlanError> {
        for output in &self.outputs {
            output.validate().map_err(|message| PlanError::InvalidDescriptor {
                file: output.file.display().to_string(),
                message,
            })?;
        }

        validate_chain(&self.stages).map_err(|message| PlanError::InvalidStageOrder {
            entry: self.entry.display().to_string(),
            message,
        })
    }

    /// Whether this pass minifies its output.
    pub fn is_minified(&self) -> bool {
        self.stages.iter().any(|stage| matches!(stage, TransformStage::Minify))
    }
}

/// The declaration-bundling pass.
///
/// Merges every type declaration reachable from the entry module into a
/// single output file. Its stage list is implied: the one
/// declaration-bundling stage.
#[derive(Debug, Clone, Serialize)]
pub struct DeclarationPass {
    /// Entry module path
    pub entry: PathBuf,
    /// Merged declaration file
    pub output: PathBuf,
}

/// The fully-resolved plan handed to the external build engine.
///
/// Pass order is primary library, then adapter, then declarations. The
/// order only shapes per-pass progress and error reporting; passes
/// carry no data dependencies on each other and may execute in
/// parallel.
#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    passes: Vec<BuildPass>,
    declarations: DeclarationPass,
}

impl BuildPlan {
    /// Create a plan from its passes.
    pub fn new(passes: Vec<BuildPass>, declarations: DeclarationPass) -> Self {
        Self { passes, declarations }
    }

    /// Bundling passes in report order.
    pub fn passes(&self) -> &[BuildPass] {
        &self.passes
    }

    /// The declaration-bundling pass.
    pub fn declarations(&self) -> &DeclarationPass {
        &self.declarations
    }

    /// Total number of distinct artifacts the plan produces, counting
    /// the merged declaration file.
    pub fn artifact_count(&self) -> usize {
        self.passes.iter().map(|pass| pass.outputs.len()).sum::<usize>() + 1
    }

    /// Validate every pass in the plan.
    pub fn validate(&self) -> Result<(), PlanError> {
        for pass in &self.passes {
            pass.validate()?;
        }
        Ok(())
    }

    /// Serialize the plan to the engine-facing JSON document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
