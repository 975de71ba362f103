// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation of `kiln.toml` declaration manifests.
//!
//! The manifest is the host boundary of the pipeline: it lists the
//! declarations of one processing round, their members and the optional
//! per-member property configuration.

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::{
    BuilderSupport, DEFAULT_BUILDER_TEMPLATE, DeclarationConfig, KilnToml, Manifest, MemberConfig,
    MemberKindConfig, ParseContext, ProjectConfig, ServiceSupport,
};
