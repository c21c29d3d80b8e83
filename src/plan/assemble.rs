//! Plan assembly.
//!
//! Fans the primary descriptor set out into build passes, appends the
//! fixed adapter pass and the declaration pass, and validates the
//! result before handing it over.

use crate::config::BundleConfig;
use crate::error::PlanError;
use crate::metadata::PackageMetadata;
use crate::mode::BuildMode;
use crate::plan::banner::{current_year, render_banner};
use crate::plan::output::{primary_outputs, OutputDescriptor};
use crate::plan::pass::{BuildPass, BuildPlan, DeclarationPass};
use crate::plan::stage::{adapter_stages, stages_for};

/// Assembles the complete build plan for one invocation.
///
/// The assembler is a pure function of its inputs: package metadata,
/// bundle configuration, and build mode. It reads nothing from the
/// process environment; callers that want the env-driven behavior pass
/// `BuildMode::from_env()` explicitly.
#[derive(Debug, Clone)]
pub struct Assembler {
    metadata: PackageMetadata,
    config: BundleConfig,
    mode: BuildMode,
}

impl Assembler {
    /// Create an assembler in the default (development) mode.
    pub fn new(metadata: PackageMetadata, config: BundleConfig) -> Self {
        Self { metadata, config, mode: BuildMode::Development }
    }

    /// Set the build mode.
    pub fn with_mode(mut self, mode: BuildMode) -> Self {
        self.mode = mode;
        self
    }

    /// Assemble the full build plan, stamping the banner with the
    /// current year.
    pub fn assemble(&self) -> Result<BuildPlan, PlanError> {
        self.assemble_for_year(current_year())
    }

    /// Assemble with an explicit banner year.
    ///
    /// The year is the one input not derivable from the assembler's
    /// fields; taking it as a parameter keeps assembly deterministic
    /// under test.
    pub fn assemble_for_year(&self, year: i32) -> Result<BuildPlan, PlanError> {
        let banner = render_banner(
            &self.metadata.name,
            &self.metadata.version,
            &self.metadata.author,
            year,
        );

        let mut passes: Vec<BuildPass> =
            primary_outputs(&self.metadata, &self.config.library, &banner)
                .into_iter()
                .map(|output| self.library_pass(output))
                .collect();
        passes.push(self.adapter_pass());

        let plan = BuildPlan::new(passes, self.declaration_pass());
        plan.validate()?;
        Ok(plan)
    }

    /// Build one primary-library pass from its output descriptor.
    fn library_pass(&self, output: OutputDescriptor) -> BuildPass {
        let stages = stages_for(&output, self.mode, &self.config.library.cache_root);
        BuildPass::new(self.config.library.entry.clone(), vec![output], stages)
    }

    /// The fixed adapter pass: two outputs from the adapter entry, with
    /// the adapter's runtime dependency left external.
    ///
    /// The adapter UMD output ships unminified in every mode; hosts that
    /// want it smaller run their own minifier.
    fn adapter_pass(&self) -> BuildPass {
        let adapter = &self.config.adapter;
        let outputs = vec![
            OutputDescriptor::esm(adapter.esm_file.clone()),
            OutputDescriptor::umd(adapter.umd_file.clone(), adapter.global_name.clone())
                .with_globals(adapter.globals.clone()),
        ];

        BuildPass::new(adapter.entry.clone(), outputs, adapter_stages())
            .with_external(adapter.external.clone())
    }

    /// The single declaration-bundling pass for the library entry.
    fn declaration_pass(&self) -> DeclarationPass {
        DeclarationPass {
            entry: self.config.library.entry.clone(),
            output: self.config.declarations.file.clone(),
        }
    }
}
