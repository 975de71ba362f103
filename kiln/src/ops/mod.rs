//! Core operations.
//!
//! This module contains the business logic for kiln commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;
pub mod explain;

pub use bake::{BakeOptions, bake};
pub use check::check;
pub use explain::explain;

use kiln_codegen::pipeline::Diagnostic;

/// Message of a diagnostic with its location on a second line.
fn diagnostic_message(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}\n  --> {}", diag.message, loc),
        None => diag.message.clone(),
    }
}
