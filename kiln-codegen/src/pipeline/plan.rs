//! Data flowing between the lower and analyze phases and into generation.

use indexmap::IndexMap;
use kiln_ir::Declaration;
use serde::Serialize;

use crate::render::RenderContext;

/// A declaration of the processing round together with its markers.
#[derive(Debug, Clone, Serialize)]
pub struct Annotated {
    pub declaration: Declaration,
    /// Present when the declaration asks for a builder.
    pub builder: Option<BuilderTarget>,
    /// Present when the declaration asks for service registration.
    pub service: Option<ServiceTarget>,
}

/// Builder generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuilderTarget {
    /// Output package override.
    pub package: Option<String>,
    /// Template name, resolved through the renderer registry.
    pub template: String,
}

/// Service registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceTarget {
    /// Explicit capability; `None` means every direct interface.
    pub capability: Option<String>,
}

/// One builder to render.
#[derive(Debug, Clone, Serialize)]
pub struct BuilderJob {
    pub template: String,
    pub context: RenderContext,
}

impl BuilderJob {
    /// Qualified name of the declaration the builder is generated from.
    pub fn origin(&self) -> &str {
        &self.context.declaration.qualified_name
    }

    /// Qualified name of the generated builder.
    pub fn target(&self) -> String {
        self.context.builder.canonical_implementation_name()
    }
}

/// Everything the generator writes for one processing round.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Plan {
    /// Builders in declaration order.
    pub builders: Vec<BuilderJob>,
    /// Capability to manifest text, in first-seen order.
    pub manifests: IndexMap<String, String>,
}

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty() && self.manifests.is_empty()
    }
}
