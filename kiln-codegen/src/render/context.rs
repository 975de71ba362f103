use kiln_ir::{Declaration, GenerationModel};
use serde::Serialize;

/// Everything a template sees: the builder model and the declaration it
/// was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub builder: GenerationModel,
    pub declaration: Declaration,
}

impl RenderContext {
    pub fn new(builder: GenerationModel, declaration: Declaration) -> Self {
        Self {
            builder,
            declaration,
        }
    }
}
