//! Compilation pipeline from a parsed manifest to a generation plan.
//!
//! - Explicit phase boundaries (validate → lower → analyze)
//! - Plugin hooks before and after each phase
//! - Diagnostics collected in one place
//!
//! # Example
//!
//! ```ignore
//! use kiln_codegen::{Generator, pipeline::Pipeline};
//!
//! let mut ctx = Pipeline::new().run(manifest)?;
//! for warning in ctx.warnings() {
//!     eprintln!("{warning}");
//! }
//!
//! let plan = ctx.take_plan()?;
//! let report = Generator::new(registry()).generate(&plan, &filer);
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plan;
mod plugin;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plan::{Annotated, BuilderJob, BuilderTarget, Plan, ServiceTarget};
pub use plugin::Plugin;
pub use runner::Pipeline;
