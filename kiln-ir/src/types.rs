//! Core type definitions.

use std::fmt;

use serde::Serialize;

/// Primitive type names recognized in member type descriptors.
pub const PRIMITIVE_TYPES: &[&str] = &[
    "boolean", "byte", "short", "char", "int", "long", "float", "double",
];

/// The absence sentinel of the generated language.
pub const NULL_LITERAL: &str = "null";

/// Semantic category of a member type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Primitive,
    Textual,
    Array,
    Reference,
}

impl TypeKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Primitive => "primitive",
            TypeKind::Textual => "textual",
            TypeKind::Array => "array",
            TypeKind::Reference => "reference",
        }
    }
}

/// A member type: the type as written plus its semantic category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SemanticType {
    name: String,
    kind: TypeKind,
}

impl SemanticType {
    /// Classify a type descriptor as written in a declaration.
    ///
    /// A trailing `[]` makes an array, the primitive names are primitive,
    /// `String` and `java.lang.String` are textual, anything else is a reference.
    pub fn parse(descriptor: &str) -> Self {
        let name = descriptor.trim();
        let kind = if name.ends_with("[]") {
            TypeKind::Array
        } else if PRIMITIVE_TYPES.contains(&name) {
            TypeKind::Primitive
        } else if name == "String" || name == "java.lang.String" {
            TypeKind::Textual
        } else {
            TypeKind::Reference
        };

        Self {
            name: name.to_string(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_primitive(&self) -> bool {
        self.kind == TypeKind::Primitive
    }

    pub fn is_textual(&self) -> bool {
        self.kind == TypeKind::Textual
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
