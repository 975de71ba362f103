//! Pipeline plugin trait.

use eyre::Result;

use super::CompilationContext;

/// A hook into the compilation pipeline.
///
/// Plugins are called before and after every phase and may inspect or
/// modify the context. Returning an error aborts the pipeline.
///
/// # Example
///
/// ```ignore
/// struct DumpPlan;
///
/// impl Plugin for DumpPlan {
///     fn name(&self) -> &'static str { "dump-plan" }
///
///     fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
///         if phase == "analyze" {
///             println!("{:#?}", ctx.plan);
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
