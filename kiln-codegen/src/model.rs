//! Generation model building.

use kiln_ir::{Declaration, GenerationModel};

use crate::classify::{classify_member, is_candidate};

/// Suffix appended to the declaration's simple name.
pub const IMPLEMENTATION_SUFFIX: &str = "Builder";

/// Build the generation model of a declaration.
///
/// The output package is `override_package` when non-empty, otherwise the
/// declaration's own package. Excluded members are dropped from the
/// property list; members keep declaration order.
pub fn build_model(declaration: &Declaration, override_package: Option<&str>) -> GenerationModel {
    let package = override_package
        .filter(|p| !p.is_empty())
        .unwrap_or(&declaration.package);

    let properties = declaration
        .members
        .iter()
        .filter(|m| is_candidate(m))
        .map(classify_member)
        .filter(|p| p.is_included())
        .collect();

    GenerationModel::new(
        declaration.simple_name.clone(),
        format!("{}{}", declaration.simple_name, IMPLEMENTATION_SUFFIX),
        package,
        properties,
    )
}

#[cfg(test)]
mod tests {
    use kiln_ir::{AccessStrategy, Member, PropertyConfig};

    use super::*;

    fn widget() -> Declaration {
        Declaration::new("com.example.Widget")
            .with_member(Member::field("id", "int"))
            .with_member(
                Member::field("label", "String")
                    .with_property(PropertyConfig::default().with_default("n/a").constructor(0)),
            )
            .with_member(
                Member::field("color", "String")
                    .with_property(PropertyConfig::default().with_access(AccessStrategy::Direct)),
            )
    }

    #[test]
    fn test_widget_model() {
        let model = build_model(&widget(), None);

        assert_eq!(model.entity_name(), "Widget");
        assert_eq!(model.implementation_name(), "WidgetBuilder");
        assert_eq!(model.implementation_package(), "com.example");

        let names: Vec<_> = model.properties().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["id", "label", "color"]);

        let id = model.property("id").unwrap();
        assert!(id.is_setter());
        assert!(!id.has_default());

        let label = model.property("label").unwrap();
        assert_eq!(label.constructor_position(), Some(0));
        assert_eq!(label.default_value(), Some("\"n/a\""));

        let color = model.property("color").unwrap();
        assert!(color.is_direct());

        assert_eq!(model.constructor_signature(), "label");
    }

    #[test]
    fn test_override_package() {
        let model = build_model(&widget(), Some("com.example.gen"));
        assert_eq!(model.implementation_package(), "com.example.gen");
        assert_eq!(
            model.canonical_implementation_name(),
            "com.example.gen.WidgetBuilder"
        );

        let model = build_model(&widget(), Some(""));
        assert_eq!(model.implementation_package(), "com.example");
    }

    #[test]
    fn test_excluded_and_static_members_dropped() {
        let declaration = Declaration::new("com.example.Widget")
            .with_member(Member::field("COUNT", "int").into_static())
            .with_member(Member::method("describe", "String"))
            .with_member(
                Member::field("secret", "String").with_property(PropertyConfig::default().excluded()),
            )
            .with_member(Member::field("id", "int"));

        let model = build_model(&declaration, None);
        let names: Vec<_> = model.properties().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["id"]);

        // Still visible on the declaration itself
        assert!(declaration.member("secret").is_some());
    }

    #[test]
    fn test_constructor_order_ignores_declaration_order() {
        let declaration = Declaration::new("Point")
            .with_member(
                Member::field("z", "int").with_property(PropertyConfig::default().constructor(2)),
            )
            .with_member(
                Member::field("x", "int").with_property(PropertyConfig::default().constructor(0)),
            )
            .with_member(
                Member::field("y", "int").with_property(PropertyConfig::default().constructor(1)),
            );

        let model = build_model(&declaration, None);
        assert_eq!(model.constructor_signature(), "x, y, z");
        assert_eq!(model.implementation_package(), "");
    }

    #[test]
    fn test_build_is_idempotent() {
        let declaration = widget();
        assert_eq!(build_model(&declaration, None), build_model(&declaration, None));
    }
}
