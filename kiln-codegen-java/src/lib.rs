//! Java templates for kiln.
//!
//! The builder template is compiled in as a stencil; call [`install`] once
//! to make `.stencil` templates resolvable through the process registry.

mod builder;

use kiln_codegen::render::{self, Renderer, RendererRegistry, StencilRenderer, StencilSet};

pub use builder::{BUILDER_TEMPLATE, builder_source};

/// Every Java stencil, keyed by template name.
pub fn stencils() -> StencilSet {
    StencilSet::new().with(BUILDER_TEMPLATE, builder_source)
}

/// Factory for the Java stencil backend.
pub fn renderer() -> Box<dyn Renderer> {
    Box::new(StencilRenderer::new(stencils()))
}

/// Add the Java stencil backend to the process registry.
pub fn install() {
    render::install(renderer);
}

/// Bundled backends plus the Java stencils, without touching the process
/// registry.
pub fn registry() -> RendererRegistry {
    RendererRegistry::bundled().with(renderer)
}
