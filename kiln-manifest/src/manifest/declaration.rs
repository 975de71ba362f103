//! Declaration entries of a kiln.toml.

use kiln_ir::{Declaration, Member, MemberKind, PropertyConfig, SemanticType};
use serde::Deserialize;

use super::validate::ParseContext;
use crate::Result;

/// Template used for builders that do not name one.
pub const DEFAULT_BUILDER_TEMPLATE: &str = "Builder.stencil";

/// One declaration of the processing round.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeclarationConfig {
    /// Qualified name (e.g., "com.example.Widget")
    pub name: String,

    /// Directly implemented interfaces, qualified
    #[serde(default)]
    pub interfaces: Vec<String>,

    /// Builder generation marker
    pub builder: Option<BuilderSupport>,

    /// Service registration marker
    pub service: Option<ServiceSupport>,

    /// Members in declaration order
    #[serde(default, rename = "member")]
    pub members: Vec<MemberConfig>,
}

/// Builder generation settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderSupport {
    /// Output package override; empty inherits the declaration package
    pub package: String,

    /// Template name override
    pub template: Option<String>,
}

impl BuilderSupport {
    /// The package override, if one is set
    pub fn package_override(&self) -> Option<&str> {
        Some(self.package.as_str()).filter(|p| !p.is_empty())
    }

    /// The template to render the builder with
    pub fn template(&self) -> &str {
        self.template.as_deref().unwrap_or(DEFAULT_BUILDER_TEMPLATE)
    }
}

/// Service registration settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceSupport {
    /// Explicit capability; empty means every directly implemented interface
    pub capability: String,
}

impl ServiceSupport {
    pub fn capability(&self) -> Option<&str> {
        Some(self.capability.as_str()).filter(|c| !c.is_empty())
    }
}

/// A member entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberConfig {
    pub name: String,

    /// Type descriptor as written (e.g., "int", "String", "byte[]")
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default = "default_kind")]
    pub kind: MemberKindConfig,

    #[serde(default, rename = "static")]
    pub is_static: bool,

    /// Per-member property configuration
    pub property: Option<PropertyConfig>,
}

/// Member kind as written in kiln.toml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKindConfig {
    Field,
    Method,
}

fn default_kind() -> MemberKindConfig {
    MemberKindConfig::Field
}

impl From<MemberKindConfig> for MemberKind {
    fn from(kind: MemberKindConfig) -> Self {
        match kind {
            MemberKindConfig::Field => MemberKind::Field,
            MemberKindConfig::Method => MemberKind::Method,
        }
    }
}

impl DeclarationConfig {
    /// Convert into the plain declaration model.
    pub fn to_declaration(&self) -> Declaration {
        let mut declaration = Declaration::new(&self.name);
        declaration.interfaces = self.interfaces.clone();
        declaration.members = self.members.iter().map(MemberConfig::to_member).collect();
        declaration
    }

    /// Validate names, interfaces and member uniqueness.
    pub(crate) fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        for interface in &self.interfaces {
            ctx.validate_qualified_name(interface, "interface")?;
        }

        if let Some(builder) = &self.builder
            && let Some(package) = builder.package_override()
        {
            ctx.validate_qualified_name(package, "package")?;
        }

        if let Some(capability) = self.service.as_ref().and_then(|s| s.capability()) {
            ctx.validate_qualified_name(capability, "capability")?;
        }

        let mut seen: Vec<&str> = Vec::new();
        for member in &self.members {
            ctx.validate_name(&member.name, "member")?;
            if member.ty.trim().is_empty() {
                return Err(ctx.source_context().validation_error(
                    format!("member '{}' has an empty type", member.name),
                    ctx.find_span(&member.name),
                ));
            }
            if seen.contains(&member.name.as_str()) {
                return Err(ctx.source_context().duplicate_error(
                    &member.name,
                    ctx.context_for("member"),
                    ctx.find_last_span(&member.name),
                ));
            }
            seen.push(&member.name);
        }

        Ok(())
    }
}

impl MemberConfig {
    pub fn to_member(&self) -> Member {
        Member {
            name: self.name.clone(),
            ty: SemanticType::parse(&self.ty),
            kind: self.kind.into(),
            is_static: self.is_static,
            property: self.property.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use kiln_ir::{AccessStrategy, TypeKind};

    use super::*;

    fn parse_declaration(content: &str) -> DeclarationConfig {
        toml::from_str(content).expect("Failed to parse test declaration")
    }

    #[test]
    fn test_builder_defaults() {
        let decl = parse_declaration(
            r#"
            name = "com.example.Widget"
            builder = {}
            "#,
        );
        let builder = decl.builder.unwrap();
        assert_eq!(builder.package_override(), None);
        assert_eq!(builder.template(), DEFAULT_BUILDER_TEMPLATE);
    }

    #[test]
    fn test_builder_overrides() {
        let decl = parse_declaration(
            r#"
            name = "com.example.Widget"
            builder = { package = "com.example.gen", template = "Builder.json" }
            "#,
        );
        let builder = decl.builder.unwrap();
        assert_eq!(builder.package_override(), Some("com.example.gen"));
        assert_eq!(builder.template(), "Builder.json");
    }

    #[test]
    fn test_service_capability() {
        let decl = parse_declaration(
            r#"
            name = "com.example.Widget"
            service = {}
            "#,
        );
        assert_eq!(decl.service.unwrap().capability(), None);

        let decl = parse_declaration(
            r#"
            name = "com.example.Widget"
            service = { capability = "com.example.Part" }
            "#,
        );
        assert_eq!(decl.service.unwrap().capability(), Some("com.example.Part"));
    }

    #[test]
    fn test_to_declaration() {
        let decl = parse_declaration(
            r#"
            name = "com.example.Widget"
            interfaces = ["com.example.Part", "java.io.Serializable"]

            [[member]]
            name = "id"
            type = "int"

            [[member]]
            name = "COUNT"
            type = "long"
            static = true

            [[member]]
            name = "describe"
            type = "String"
            kind = "method"
            property = { access = "direct" }
            "#,
        );

        let declaration = decl.to_declaration();
        assert_eq!(declaration.simple_name, "Widget");
        assert_eq!(declaration.package, "com.example");
        assert_eq!(declaration.interfaces.len(), 2);

        let id = declaration.member("id").unwrap();
        assert_eq!(id.ty.kind(), TypeKind::Primitive);
        assert_eq!(id.kind, MemberKind::Field);

        assert!(declaration.member("COUNT").unwrap().is_static);

        let describe = declaration.member("describe").unwrap();
        assert_eq!(describe.kind, MemberKind::Method);
        assert_eq!(
            describe.property.as_ref().map(|p| p.access),
            Some(AccessStrategy::Direct)
        );
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = toml::from_str::<DeclarationConfig>(
            r#"
            name = "com.example.Widget"

            [[member]]
            name = "id"
            type = "int"
            kind = "constructor"
            "#,
        );
        assert!(result.is_err());
    }
}
