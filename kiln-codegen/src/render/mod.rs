//! Rendering backends and their selection.
//!
//! A [`Renderer`] turns a [`RenderContext`] into text through one bound
//! template. The [`RendererRegistry`] picks a backend by template suffix and
//! hands out a freshly initialized instance on every resolution.
//!
//! Bundled backends:
//! - [`JsonRenderer`] - `.json`, dumps the render context for inspection
//! - [`StencilRenderer`] - `.stencil`, compiled-in templates looked up by name

mod context;
mod json;
mod registry;
mod renderer;
mod stencil;

pub use context::RenderContext;
pub use json::JsonRenderer;
pub use registry::{RendererFactory, RendererRegistry, install, registry, reset, resolve, suffix_of};
pub use renderer::{Renderer, bound_template, check_initialize};
pub use stencil::{Stencil, StencilRenderer, StencilSet};
