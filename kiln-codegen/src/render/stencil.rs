//! Compiled-in templates.
//!
//! A stencil is a plain function from the render context to source text,
//! usually written against [`CodeBuilder`](crate::builder::CodeBuilder).
//! Language crates ship a [`StencilSet`] and install a [`StencilRenderer`]
//! over it.

use std::io::Write;

use indexmap::IndexMap;

use super::{
    RenderContext, Renderer,
    renderer::{bound_template, check_initialize},
};
use crate::{Error, Result};

/// A compiled-in template.
pub type Stencil = fn(&RenderContext) -> String;

/// Named stencils, in registration order.
#[derive(Debug, Clone, Default)]
pub struct StencilSet {
    stencils: IndexMap<&'static str, Stencil>,
}

impl StencilSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stencil under its template name (e.g., "Builder.stencil").
    pub fn with(mut self, name: &'static str, stencil: Stencil) -> Self {
        self.stencils.insert(name, stencil);
        self
    }

    pub fn get(&self, name: &str) -> Option<Stencil> {
        self.stencils.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stencils.keys().copied()
    }
}

/// Backend for `.stencil` templates.
#[derive(Debug, Default)]
pub struct StencilRenderer {
    stencils: StencilSet,
    template: Option<String>,
}

impl StencilRenderer {
    pub fn new(stencils: StencilSet) -> Self {
        Self {
            stencils,
            template: None,
        }
    }
}

impl Renderer for StencilRenderer {
    fn name(&self) -> &'static str {
        "stencil"
    }

    fn supported_suffixes(&self) -> &[&'static str] {
        &[".stencil"]
    }

    fn initialize(&mut self, template: &str) -> Result<()> {
        check_initialize(&*self, template)?;
        self.template = Some(template.to_string());
        Ok(())
    }

    fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    fn evaluate(&self, ctx: &RenderContext, out: &mut dyn Write) -> Result<()> {
        let template = bound_template(self)?;
        let stencil = self.stencils.get(template).ok_or_else(|| {
            let available: Vec<_> = self.stencils.names().collect();
            Error::evaluation(
                template,
                format!("no stencil named '{}' (available: {})", template, available.join(", ")),
            )
        })?;

        out.write_all(stencil(ctx).as_bytes())
            .map_err(|e| Error::sink(template, e))
    }
}
