//! Pipeline orchestrator.

use eyre::Result;
use kiln_manifest::Manifest;
use tracing::debug;

use super::{
    CompilationContext, Phase, PhaseInfo, Plugin,
    phases::{AnalyzePhase, LowerPhase, ValidatePhase},
};

/// Runs the built-in phases, then any added phases, with plugin hooks
/// around each one.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new()
///     .plugin(MyPlugin::new())
///     .phase(MyCustomPhase)
///     .run(manifest)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a pipeline with the default lints.
    pub fn new() -> Self {
        Self::with_validate(ValidatePhase::new())
    }

    /// Create a pipeline with a custom validate phase (e.g., extra lints).
    pub fn with_validate(validate: ValidatePhase) -> Self {
        Self {
            validate,
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Phases in execution order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        self.all_phases().iter().map(|p| p.info()).collect()
    }

    fn all_phases(&self) -> Vec<&dyn Phase> {
        let mut phases: Vec<&dyn Phase> = Vec::with_capacity(3 + self.phases.len());
        phases.push(&self.validate);
        phases.push(&LowerPhase);
        phases.push(&AnalyzePhase);
        for phase in &self.phases {
            phases.push(phase.as_ref());
        }
        phases
    }

    /// Run every phase on a manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase or plugin fails fatally.
    pub fn run(&self, manifest: Manifest) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(manifest);

        for phase in self.all_phases() {
            self.run_phase(phase, &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        debug!(phase = phase_name, "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        str::FromStr,
        sync::{
            Arc, Mutex,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use super::*;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct RecordingPhase(Arc<Mutex<Vec<String>>>);

    impl Phase for RecordingPhase {
        fn name(&self) -> &'static str {
            "record"
        }

        fn description(&self) -> &'static str {
            "Record builder names"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            let plan = ctx.plan.as_ref().ok_or_else(|| eyre::eyre!("no plan"))?;
            let mut seen = self.0.lock().unwrap();
            seen.extend(plan.builders.iter().map(|b| b.target()));
            Ok(())
        }
    }

    fn make_test_manifest() -> Manifest {
        Manifest::from_str(
            r#"
            [project]
            name = "shop"

            [[declaration]]
            name = "com.example.Widget"
            builder = {}

            [[declaration.member]]
            name = "id"
            type = "int"
            "#,
        )
        .expect("Failed to parse test manifest")
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new()
            .run(make_test_manifest())
            .expect("pipeline should succeed");

        assert!(ctx.declarations.is_some());
        assert_eq!(ctx.plan.as_ref().map(|p| p.builders.len()), Some(1));
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let before = Arc::new(AtomicUsize::new(0));
        let after = Arc::new(AtomicUsize::new(0));
        let plugin = CountingPlugin {
            before_count: before.clone(),
            after_count: after.clone(),
        };

        Pipeline::new()
            .plugin(plugin)
            .run(make_test_manifest())
            .expect("pipeline should succeed");

        // 3 built-in phases = 3 before + 3 after hooks
        assert_eq!(before.load(Ordering::SeqCst), 3);
        assert_eq!(after.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_custom_phase_runs_last() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let pipeline = Pipeline::new().phase(RecordingPhase(seen.clone()));

        let names: Vec<_> = pipeline.phase_info().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["validate", "lower", "analyze", "record"]);

        pipeline.run(make_test_manifest()).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["com.example.WidgetBuilder"]);
    }
}
