//! Generation model handed to rendering backends.

use kiln_core::{join_qualified, uncapitalize};
use serde::Serialize;

use crate::PropertyDescriptor;

/// The model of one generated builder.
///
/// Properties are the included properties in member declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationModel {
    entity_name: String,
    implementation_name: String,
    implementation_package: String,
    properties: Vec<PropertyDescriptor>,
}

impl GenerationModel {
    pub fn new(
        entity_name: impl Into<String>,
        implementation_name: impl Into<String>,
        implementation_package: impl Into<String>,
        properties: Vec<PropertyDescriptor>,
    ) -> Self {
        Self {
            entity_name: entity_name.into(),
            implementation_name: implementation_name.into(),
            implementation_package: implementation_package.into(),
            properties,
        }
    }

    /// Simple name of the declaration being built (e.g., "Widget").
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Simple name of the generated type (e.g., "WidgetBuilder").
    pub fn implementation_name(&self) -> &str {
        &self.implementation_name
    }

    pub fn implementation_package(&self) -> &str {
        &self.implementation_package
    }

    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    /// Find a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// Qualified name of the generated type.
    pub fn canonical_implementation_name(&self) -> String {
        join_qualified(&self.implementation_package, &self.implementation_name)
    }

    /// Entity name with a lowercase first letter (e.g., "widget").
    pub fn uncapitalized_entity_name(&self) -> String {
        uncapitalize(&self.entity_name)
    }

    /// Constructor properties ordered by position.
    ///
    /// The sort is stable: equal positions keep declaration order.
    pub fn constructor_args(&self) -> Vec<&PropertyDescriptor> {
        let mut args: Vec<_> = self
            .properties
            .iter()
            .filter(|p| p.is_constructor())
            .collect();
        args.sort_by_key(|p| p.constructor_position());
        args
    }

    /// Comma-joined constructor argument names (e.g., "label, color").
    pub fn constructor_signature(&self) -> String {
        self.constructor_args()
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Accessor, SemanticType};

    fn ctor(name: &str, position: u32) -> PropertyDescriptor {
        PropertyDescriptor::new(
            name,
            SemanticType::parse("String"),
            None,
            format!("with{}", name),
            Accessor::Constructor { position },
        )
    }

    fn setter(name: &str) -> PropertyDescriptor {
        PropertyDescriptor::new(
            name,
            SemanticType::parse("int"),
            None,
            format!("with{}", name),
            Accessor::Setter {
                setter_name: format!("set{}", name),
            },
        )
    }

    #[test]
    fn test_canonical_name() {
        let model = GenerationModel::new("Widget", "WidgetBuilder", "com.example", vec![]);
        assert_eq!(
            model.canonical_implementation_name(),
            "com.example.WidgetBuilder"
        );

        let model = GenerationModel::new("Widget", "WidgetBuilder", "", vec![]);
        assert_eq!(model.canonical_implementation_name(), "WidgetBuilder");
    }

    #[test]
    fn test_uncapitalized_entity_name() {
        let model = GenerationModel::new("Widget", "WidgetBuilder", "com.example", vec![]);
        assert_eq!(model.uncapitalized_entity_name(), "widget");
    }

    #[test]
    fn test_constructor_args_sorted_by_position() {
        let model = GenerationModel::new(
            "Widget",
            "WidgetBuilder",
            "com.example",
            vec![ctor("c", 2), setter("id"), ctor("a", 0), ctor("b", 1)],
        );

        let names: Vec<_> = model.constructor_args().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(model.constructor_signature(), "a, b, c");
    }

    #[test]
    fn test_constructor_args_stable_for_equal_positions() {
        let model = GenerationModel::new(
            "Widget",
            "WidgetBuilder",
            "com.example",
            vec![ctor("second", 1), ctor("x", 0), ctor("y", 0)],
        );

        assert_eq!(model.constructor_signature(), "x, y, second");
    }

    #[test]
    fn test_no_constructor_args() {
        let model = GenerationModel::new("Widget", "WidgetBuilder", "", vec![setter("id")]);
        assert!(model.constructor_args().is_empty());
        assert_eq!(model.constructor_signature(), "");
    }
}
