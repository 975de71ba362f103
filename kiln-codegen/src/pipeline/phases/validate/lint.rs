//! Lint trait for manifest validation.

use kiln_manifest::Manifest;

use crate::pipeline::Diagnostic;

/// Name and description of a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A check over the whole manifest.
///
/// Lints only report; parse-time validation in kiln-manifest already
/// rejects malformed input.
pub trait Lint: Send + Sync {
    /// Kebab-case lint name (e.g., "empty-builder").
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the manifest and add any diagnostics.
    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
