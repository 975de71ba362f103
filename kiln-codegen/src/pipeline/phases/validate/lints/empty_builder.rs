//! Lint for builders without properties.

use kiln_manifest::Manifest;

use super::{super::Lint, builder_models};
use crate::pipeline::Diagnostic;

/// Warns about builder-marked declarations that end up with no properties.
pub struct EmptyBuilderLint;

impl Lint for EmptyBuilderLint {
    fn name(&self) -> &'static str {
        "empty-builder"
    }

    fn description(&self) -> &'static str {
        "Builder declarations should have at least one property"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for (config, model) in builder_models(manifest) {
            if model.properties().is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("No builder properties defined for {}", model.entity_name()),
                    )
                    .at(&config.name),
                );
            }
        }
    }
}
