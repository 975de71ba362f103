//! Intermediate representation types for the kiln source generator.
//!
//! This crate provides the plain-data model shared across the kiln
//! generation pipeline.
//!
//! # Architecture
//!
//! ```text
//! kiln.toml (TOML) → kiln-manifest (parsing) → kiln-ir (declarations, models) → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Independent of how the host discovered the declarations
//! - Owned trees of plain records (no back references)
//! - Serializable, so any rendering backend can consume them

mod declaration;
mod model;
mod property;
mod types;

pub use declaration::{Declaration, Member, MemberKind};
pub use model::GenerationModel;
pub use property::{AccessStrategy, Accessor, DEFAULT_PREFIX, PropertyConfig, PropertyDescriptor};
pub use types::{NULL_LITERAL, PRIMITIVE_TYPES, SemanticType, TypeKind};
