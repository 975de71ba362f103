//! Built-in lints for manifest validation.

mod constructor_positions;
mod empty_builder;
mod service_without_capability;

pub use constructor_positions::ConstructorPositionsLint;
pub use empty_builder::EmptyBuilderLint;
pub use service_without_capability::ServiceWithoutCapabilityLint;

use kiln_ir::GenerationModel;
use kiln_manifest::{DeclarationConfig, Manifest};

use crate::model::build_model;

/// Generation models of the builder-marked declarations.
fn builder_models(manifest: &Manifest) -> impl Iterator<Item = (&DeclarationConfig, GenerationModel)> {
    manifest.builders().map(|config| {
        let package = config.builder.as_ref().and_then(|b| b.package_override());
        (config, build_model(&config.to_declaration(), package))
    })
}
