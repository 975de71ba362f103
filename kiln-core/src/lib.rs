//! Core utilities and types for the kiln source generator.
//!
//! This crate provides the naming helpers and the artifact sink boundary
//! shared by every other kiln crate.

mod sink;
mod utils;

// Artifact sinks
pub use sink::{Artifact, DirFiler, FileSink, Filer, MemoryFiler, MemorySink, Sink, source_path};
// String utilities
pub use utils::{capitalize, join_qualified, split_qualified, uncapitalize};
