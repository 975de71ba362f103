//! Lower phase - turns manifest entries into declarations.

use eyre::Result;
use kiln_manifest::{DeclarationConfig, Manifest};

use crate::pipeline::{Annotated, BuilderTarget, CompilationContext, Phase, ServiceTarget};

/// Phase that converts every manifest declaration into an [`Annotated`]
/// declaration, keeping manifest order.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Transform manifest entries into declarations"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.declarations = Some(lower_manifest(&ctx.manifest));
        Ok(())
    }
}

/// Lower every declaration of a manifest.
pub fn lower_manifest(manifest: &Manifest) -> Vec<Annotated> {
    manifest.declarations.iter().map(lower_declaration).collect()
}

fn lower_declaration(config: &DeclarationConfig) -> Annotated {
    Annotated {
        declaration: config.to_declaration(),
        builder: config.builder.as_ref().map(|b| BuilderTarget {
            package: b.package_override().map(str::to_string),
            template: b.template().to_string(),
        }),
        service: config.service.as_ref().map(|s| ServiceTarget {
            capability: s.capability().map(str::to_string),
        }),
    }
}
