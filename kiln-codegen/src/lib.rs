//! Generation machinery for the kiln source generator.
//!
//! # Module Organization
//!
//! - [`classify`] - Member + configuration → resolved property
//! - [`model`] - Declaration → generation model
//! - [`render`] - Renderer contract, registry and bundled backends
//! - [`services`] - Capability manifest aggregation
//! - [`builder`] - Code building blocks for compiled-in templates
//! - [`pipeline`] - Validate → lower → analyze phases

pub mod builder;
pub mod classify;
mod error;
mod generate;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod services;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use generate::{Failure, GenerateReport, GeneratedBuilder, GeneratedManifest, Generator};
