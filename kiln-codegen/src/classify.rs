//! Property classification.
//!
//! Turns a raw [`Member`] plus its optional [`PropertyConfig`] into a fully
//! resolved [`PropertyDescriptor`]. Classification is total: a missing
//! configuration degrades to [`PropertyConfig::DEFAULT`], never to an error.

use kiln_core::capitalize;
use kiln_ir::{
    AccessStrategy, Accessor, Member, MemberKind, NULL_LITERAL, PropertyConfig,
    PropertyDescriptor, SemanticType, TypeKind,
};

/// Whether a member takes part in builder generation at all.
///
/// Configured members are always candidates (their `include` flag decides
/// the accessor later). Unconfigured members are candidates only when they
/// are instance fields.
pub fn is_candidate(member: &Member) -> bool {
    member.property.is_some() || (member.kind == MemberKind::Field && !member.is_static)
}

/// Classify a member using its own configuration, if any.
pub fn classify_member(member: &Member) -> PropertyDescriptor {
    classify(member, member.property.as_ref())
}

/// Classify a member with an explicit configuration.
///
/// `None` applies [`PropertyConfig::DEFAULT`]. An excluded member resolves to
/// [`Accessor::None`]: still modeled, never generated.
pub fn classify(member: &Member, config: Option<&PropertyConfig>) -> PropertyDescriptor {
    let config = config.unwrap_or(&PropertyConfig::DEFAULT);

    let accessor = if config.include {
        resolve_accessor(&member.name, config)
    } else {
        Accessor::None
    };

    PropertyDescriptor::new(
        member.name.clone(),
        member.ty.clone(),
        resolve_default(&member.ty, &config.default_value),
        accessor_method_name(&config.prefix, &member.name),
        accessor,
    )
}

/// Accessor method name (e.g., ("with", "label") -> "withLabel").
pub fn accessor_method_name(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, capitalize(name))
}

/// Setter name (e.g., "label" -> "setLabel").
pub fn setter_name(name: &str) -> String {
    format!("set{}", capitalize(name))
}

fn resolve_accessor(name: &str, config: &PropertyConfig) -> Accessor {
    match config.access {
        AccessStrategy::Direct => Accessor::Direct,
        AccessStrategy::Setter => Accessor::Setter {
            setter_name: setter_name(name),
        },
        AccessStrategy::Constructor => Accessor::Constructor {
            position: config.constructor_position,
        },
    }
}

/// Resolve the default literal for a type.
///
/// Returns `None` only for primitives without a configured default; every
/// other unconfigured type falls back to [`NULL_LITERAL`].
pub fn resolve_default(ty: &SemanticType, configured: &str) -> Option<String> {
    match (ty.kind(), configured.is_empty()) {
        (TypeKind::Primitive, false) => Some(configured.to_string()),
        (TypeKind::Primitive, true) => None,
        (TypeKind::Textual, false) => Some(format!("\"{}\"", configured)),
        (TypeKind::Array | TypeKind::Reference, false) => Some(configured.to_string()),
        (_, true) => Some(NULL_LITERAL.to_string()),
    }
}
