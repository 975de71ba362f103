//! Error types for rendering and artifact generation.

use std::io;

use thiserror::Error;

/// Result type for kiln-codegen operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// No registered backend handles the template suffix.
    #[error("no renderer supports template '{template}'")]
    UnsupportedTemplate { template: String },

    /// A backend failed while evaluating a model against its template.
    #[error("failed to evaluate template '{template}': {message}")]
    TemplateEvaluation { template: String, message: String },

    /// A backend was initialized twice, or for a template it does not support.
    #[error("cannot initialize renderer for '{template}': {reason}")]
    Initialize { template: String, reason: String },

    /// Opening, writing or closing an artifact sink failed.
    #[error("failed to write '{target}'")]
    Sink {
        target: String,
        #[source]
        source: io::Error,
    },

    /// Persisting a capability manifest failed.
    #[error("failed to write service manifest for '{capability}'")]
    ManifestWrite {
        capability: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn evaluation(template: impl Into<String>, message: impl ToString) -> Self {
        Self::TemplateEvaluation {
            template: template.into(),
            message: message.to_string(),
        }
    }

    pub fn sink(target: impl Into<String>, source: io::Error) -> Self {
        Self::Sink {
            target: target.into(),
            source,
        }
    }

    pub(crate) fn initialize(template: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Initialize {
            template: template.into(),
            reason: reason.into(),
        }
    }
}
