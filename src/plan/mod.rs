//! Build-plan assembly for the library's distributable artifacts.
//!
//! One logical library fans out into several build passes: a pass per
//! primary output descriptor (UMD and ESM variants of the same entry
//! module), a fixed pass for the framework adapter, and a final pass
//! that merges type declarations into a single file.
//!
//! # Overview
//!
//! Assembly consists of:
//! - **Descriptors**: declarative data for each desired artifact
//! - **Stages**: the ordered transform chain each pass runs
//! - **Aggregation**: fanning descriptors out into the full plan
//!
//! # Example
//!
//! ```ignore
//! use distplan::config::load_config;
//! use distplan::metadata::load_metadata;
//! use distplan::mode::BuildMode;
//! use distplan::plan::Assembler;
//!
//! let metadata = load_metadata(Path::new("package.json"))?;
//! let config = load_config(None)?;
//! let plan = Assembler::new(metadata, config)
//!     .with_mode(BuildMode::from_env())
//!     .assemble()?;
//! println!("{}", plan.to_json()?);
//! ```

pub mod assemble;
pub mod banner;
pub mod format;
pub mod output;
pub mod pass;
pub mod stage;

pub use assemble::*;
pub use banner::*;
pub use format::*;
pub use output::*;
pub use pass::*;
pub use stage::*;
