//! Declaration model.

use kiln_core::split_qualified;
use serde::Serialize;

use crate::{PropertyConfig, SemanticType};

/// Kind of a declaration member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Field,
    Method,
}

/// A field-like element of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    /// Member name.
    pub name: String,
    /// Member type.
    #[serde(rename = "type")]
    pub ty: SemanticType,
    /// Field or method.
    pub kind: MemberKind,
    /// Whether the member is static.
    pub is_static: bool,
    /// Explicit property configuration, if the member carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<PropertyConfig>,
}

impl Member {
    /// Create an instance field with no property configuration.
    pub fn field(name: impl Into<String>, ty: &str) -> Self {
        Self {
            name: name.into(),
            ty: SemanticType::parse(ty),
            kind: MemberKind::Field,
            is_static: false,
            property: None,
        }
    }

    /// Create a method member.
    pub fn method(name: impl Into<String>, return_type: &str) -> Self {
        Self {
            kind: MemberKind::Method,
            ..Self::field(name, return_type)
        }
    }

    /// Mark the member as static.
    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Attach a property configuration.
    pub fn with_property(mut self, property: PropertyConfig) -> Self {
        self.property = Some(property);
        self
    }
}

/// A declaration handed to the pipeline.
///
/// Members keep declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// Simple name (e.g., "Widget").
    pub simple_name: String,
    /// Qualified name (e.g., "com.example.Widget").
    pub qualified_name: String,
    /// Owning package (e.g., "com.example"), empty for the unnamed package.
    pub package: String,
    /// Directly implemented interfaces, qualified, in declaration order.
    pub interfaces: Vec<String>,
    /// Members in declaration order.
    pub members: Vec<Member>,
}

impl Declaration {
    /// Create a declaration from its qualified name.
    pub fn new(qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let (package, simple_name) = split_qualified(&qualified_name);
        Self {
            simple_name: simple_name.to_string(),
            package: package.to_string(),
            qualified_name: qualified_name.clone(),
            interfaces: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Add a member.
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Add a directly implemented interface.
    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Find a member by name.
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }
}
