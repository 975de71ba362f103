use std::io::Write;

use super::{
    RenderContext, Renderer,
    renderer::{bound_template, check_initialize},
};
use crate::{Error, Result};

/// Writes the render context as pretty JSON.
///
/// Useful for inspecting exactly what a template would receive.
#[derive(Debug, Default)]
pub struct JsonRenderer {
    template: Option<String>,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for JsonRenderer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn supported_suffixes(&self) -> &[&'static str] {
        &[".json"]
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
        serde_json::to_writer_pretty(&mut *out, ctx).map_err(|e| {
            if e.is_io() {
                Error::sink(template, e.into())
            } else {
                Error::evaluation(template, e)
            }
        })?;
        out.write_all(b"\n").map_err(|e| Error::sink(template, e))
    }
}
