//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the manifest
//! - [`LowerPhase`] - turns manifest entries into declarations
//! - [`AnalyzePhase`] - builds generation models and service manifests

mod analyze;
mod lower;
mod validate;

pub use analyze::AnalyzePhase;
pub use lower::{LowerPhase, lower_manifest};
pub use validate::{
    ConstructorPositionsLint, EmptyBuilderLint, Lint, LintInfo, ServiceWithoutCapabilityLint,
    ValidatePhase,
};
