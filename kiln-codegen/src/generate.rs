//! Writing a plan's artifacts.

use kiln_core::Filer;
use tracing::{debug, error};

use crate::{
    Error,
    pipeline::{BuilderJob, Plan},
    render::RendererRegistry,
    services::write_manifest,
};

/// A builder that was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBuilder {
    /// Declaration the builder was generated from.
    pub origin: String,
    /// Qualified name of the generated builder.
    pub target: String,
    pub template: String,
}

/// A manifest that was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedManifest {
    pub capability: String,
    /// Path relative to the output root.
    pub path: String,
    pub implementations: usize,
}

/// Something that could not be generated.
#[derive(Debug)]
pub struct Failure {
    /// Declaration or capability the failure belongs to.
    pub subject: String,
    pub error: Error,
}

/// Outcome of [`Generator::generate`].
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub builders: Vec<GeneratedBuilder>,
    pub manifests: Vec<GeneratedManifest>,
    pub failures: Vec<Failure>,
}

impl GenerateReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Renders builders and writes service manifests.
///
/// Failures are recorded per declaration (or per capability) and the next
/// one proceeds; nothing is retried.
#[derive(Debug, Clone)]
pub struct Generator {
    registry: RendererRegistry,
}

impl Generator {
    pub fn new(registry: RendererRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    /// Write every artifact of `plan` through `filer`.
    pub fn generate(&self, plan: &Plan, filer: &dyn Filer) -> GenerateReport {
        let mut report = GenerateReport::default();

        for job in &plan.builders {
            match self.generate_builder(job, filer) {
                Ok(generated) => report.builders.push(generated),
                Err(error) => {
                    error!(declaration = job.origin(), %error, "builder generation failed");
                    report.failures.push(Failure {
                        subject: job.origin().to_string(),
                        error,
                    });
                }
            }
        }

        for (capability, text) in &plan.manifests {
            match write_manifest(filer, capability, text) {
                Ok(path) => report.manifests.push(GeneratedManifest {
                    capability: capability.clone(),
                    path,
                    implementations: text.lines().count(),
                }),
                Err(error) => {
                    error!(%capability, %error, "service manifest write failed");
                    report.failures.push(Failure {
                        subject: capability.clone(),
                        error,
                    });
                }
            }
        }

        report
    }

    /// Render one builder into a newly created source artifact.
    pub fn generate_builder(&self, job: &BuilderJob, filer: &dyn Filer) -> Result<GeneratedBuilder, Error> {
        let renderer = self.registry.resolve(&job.template)?;
        let target = job.target();
        debug!(%target, backend = renderer.name(), "rendering builder");

        let artifact = filer
            .create_source(&target, Some(job.origin()))
            .map_err(|e| Error::sink(&target, e))?;

        renderer
            .generate_into_artifact(&job.context, artifact)
            .map_err(|e| into_error(&job.template, &target, e))?;

        Ok(GeneratedBuilder {
            origin: job.origin().to_string(),
            target,
            template: job.template.clone(),
        })
    }
}

/// Recover the evaluation error from its I/O wrapping; anything else is a
/// sink failure.
fn into_error(template: &str, target: &str, error: std::io::Error) -> Error {
    let wraps_evaluation = error.get_ref().is_some_and(|e| e.is::<Error>());
    if !wraps_evaluation {
        return Error::sink(target, error);
    }

    match error.into_inner().map(|e| e.downcast::<Error>()) {
        Some(Ok(inner)) => *inner,
        Some(Err(other)) => Error::evaluation(template, other),
        None => Error::evaluation(template, "renderer failed"),
    }
}
