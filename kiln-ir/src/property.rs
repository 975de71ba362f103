//! Property configuration and resolved property descriptors.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::SemanticType;

/// Method-name prefix used when a member carries no explicit prefix.
pub const DEFAULT_PREFIX: &str = "with";

/// How the generated code assigns a property on the built instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessStrategy {
    /// Assign the field directly.
    Direct,
    /// Call the `set<Name>` setter.
    #[default]
    Setter,
    /// Pass the value as a constructor argument.
    Constructor,
}

impl AccessStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessStrategy::Direct => "direct",
            AccessStrategy::Setter => "setter",
            AccessStrategy::Constructor => "constructor",
        }
    }
}

/// Optional per-member configuration.
///
/// Every field has a documented default, so a partially written
/// configuration deserializes to [`PropertyConfig::DEFAULT`] with the given
/// fields replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PropertyConfig {
    /// Accessor method-name prefix.
    pub prefix: Cow<'static, str>,
    /// Raw default literal; empty means "use the type default".
    #[serde(rename = "default")]
    pub default_value: Cow<'static, str>,
    /// Accessor strategy.
    pub access: AccessStrategy,
    /// Constructor argument position, only meaningful for `Constructor`.
    #[serde(rename = "position")]
    pub constructor_position: u32,
    /// `false` drops the member from generation.
    pub include: bool,
}

impl PropertyConfig {
    /// The configuration applied to members that carry none.
    pub const DEFAULT: Self = Self {
        prefix: Cow::Borrowed(DEFAULT_PREFIX),
        default_value: Cow::Borrowed(""),
        access: AccessStrategy::Setter,
        constructor_position: 0,
        include: true,
    };

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Cow::Owned(prefix.into());
        self
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Cow::Owned(default_value.into());
        self
    }

    pub fn with_access(mut self, access: AccessStrategy) -> Self {
        self.access = access;
        self
    }

    /// Use constructor access at the given position.
    pub fn constructor(mut self, position: u32) -> Self {
        self.access = AccessStrategy::Constructor;
        self.constructor_position = position;
        self
    }

    pub fn excluded(mut self) -> Self {
        self.include = false;
        self
    }
}

impl Default for PropertyConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Resolved accessor of a property.
///
/// Strategy-specific data lives on the variant that needs it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Accessor {
    /// Modeled but not generated.
    None,
    Direct,
    Setter { setter_name: String },
    Constructor { position: u32 },
}

/// A fully resolved property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    name: String,
    #[serde(rename = "type")]
    ty: SemanticType,
    default_value: Option<String>,
    method_name: String,
    accessor: Accessor,
}

impl PropertyDescriptor {
    pub fn new(
        name: impl Into<String>,
        ty: SemanticType,
        default_value: Option<String>,
        method_name: impl Into<String>,
        accessor: Accessor,
    ) -> Self {
        Self {
            name: name.into(),
            ty,
            default_value,
            method_name: method_name.into(),
            accessor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &SemanticType {
        &self.ty
    }

    /// The resolved default literal, `None` when no default is emitted.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn has_default(&self) -> bool {
        self.default_value.is_some()
    }

    /// Accessor method name (`prefix + capitalized name`), regardless of strategy.
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn accessor(&self) -> &Accessor {
        &self.accessor
    }

    pub fn is_included(&self) -> bool {
        self.accessor != Accessor::None
    }

    pub fn is_direct(&self) -> bool {
        self.accessor == Accessor::Direct
    }

    pub fn is_setter(&self) -> bool {
        matches!(self.accessor, Accessor::Setter { .. })
    }

    pub fn is_constructor(&self) -> bool {
        matches!(self.accessor, Accessor::Constructor { .. })
    }

    pub fn setter_name(&self) -> Option<&str> {
        match &self.accessor {
            Accessor::Setter { setter_name } => Some(setter_name),
            _ => None,
        }
    }

    pub fn constructor_position(&self) -> Option<u32> {
        match self.accessor {
            Accessor::Constructor { position } => Some(position),
            _ => None,
        }
    }
}
