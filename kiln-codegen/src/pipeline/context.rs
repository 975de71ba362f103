//! Compilation context passed through pipeline phases.

use kiln_manifest::Manifest;

use super::{
    diagnostic::{Diagnostic, Severity},
    plan::{Annotated, Plan},
};

/// State of one compilation, accumulated phase by phase.
#[derive(Debug)]
pub struct CompilationContext {
    /// The manifest being compiled.
    pub manifest: Manifest,
    /// The processing round (populated by LowerPhase).
    pub declarations: Option<Vec<Annotated>>,
    /// What to generate (populated by AnalyzePhase).
    pub plan: Option<Plan>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            declarations: None,
            plan: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_note(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::note(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    /// Take the plan out of the context.
    ///
    /// # Errors
    ///
    /// Fails if AnalyzePhase has not run.
    pub fn take_plan(&mut self) -> eyre::Result<Plan> {
        self.plan
            .take()
            .ok_or_else(|| eyre::eyre!("plan not set - did AnalyzePhase run?"))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn make_test_manifest() -> Manifest {
        Manifest::from_str(
            r#"
            [project]
            name = "shop"
            "#,
        )
        .expect("Failed to parse test manifest")
    }

    #[test]
    fn test_context_creation() {
        let ctx = CompilationContext::new(make_test_manifest());

        assert!(ctx.declarations.is_none());
        assert!(ctx.plan.is_none());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = CompilationContext::new(make_test_manifest());

        ctx.add_error("test", "test error");
        ctx.add_warning("test", "test warning");
        ctx.add_note("test", "test note");

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(ctx.errors().count(), 1);
    }

    #[test]
    fn test_take_plan_requires_analyze() {
        let mut ctx = CompilationContext::new(make_test_manifest());
        assert!(ctx.take_plan().is_err());

        ctx.plan = Some(Plan::default());
        assert!(ctx.take_plan().is_ok());
        assert!(ctx.plan.is_none());
    }
}
