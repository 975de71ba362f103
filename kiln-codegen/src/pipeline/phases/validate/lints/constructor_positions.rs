//! Lint for constructor positions that do not form a valid signature.

use kiln_manifest::Manifest;

use super::{super::Lint, builder_models};
use crate::pipeline::Diagnostic;

/// Warns when constructor positions are not `0..n` without gaps or duplicates.
///
/// Generation still proceeds: equal positions keep declaration order and
/// gaps are closed up, which may not match the real constructor.
pub struct ConstructorPositionsLint;

impl Lint for ConstructorPositionsLint {
    fn name(&self) -> &'static str {
        "constructor-positions"
    }

    fn description(&self) -> &'static str {
        "Constructor positions must be 0..n without gaps or duplicates"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for (config, model) in builder_models(manifest) {
            let positions: Vec<u32> = model
                .constructor_args()
                .iter()
                .filter_map(|p| p.constructor_position())
                .collect();

            let contiguous = positions
                .iter()
                .enumerate()
                .all(|(expected, actual)| *actual as usize == expected);

            if !contiguous {
                let listed: Vec<String> = positions.iter().map(u32::to_string).collect();
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "constructor positions of '{}' are [{}], expected 0..{} without gaps or duplicates",
                            config.name,
                            listed.join(", "),
                            positions.len()
                        ),
                    )
                    .at(&config.name),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn check(content: &str) -> Vec<Diagnostic> {
        let manifest = Manifest::from_str(content).expect("Failed to parse test manifest");
        let mut diagnostics = Vec::new();
        ConstructorPositionsLint.check(&manifest, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_contiguous_positions() {
        let diagnostics = check(
            r#"
            [project]
            name = "shop"

            [[declaration]]
            name = "com.example.Point"
            builder = {}

            [[declaration.member]]
            name = "y"
            type = "int"
            property = { access = "constructor", position = 1 }

            [[declaration.member]]
            name = "x"
            type = "int"
            property = { access = "constructor", position = 0 }
            "#,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_positions() {
        let diagnostics = check(
            r#"
            [project]
            name = "shop"

            [[declaration]]
            name = "com.example.Point"
            builder = {}

            [[declaration.member]]
            name = "x"
            type = "int"
            property = { access = "constructor" }

            [[declaration.member]]
            name = "y"
            type = "int"
            property = { access = "constructor" }
            "#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert!(diagnostics[0].message.contains("[0, 0]"));
    }

    #[test]
    fn test_gap_in_positions() {
        let diagnostics = check(
            r#"
            [project]
            name = "shop"

            [[declaration]]
            name = "com.example.Point"
            builder = {}

            [[declaration.member]]
            name = "x"
            type = "int"
            property = { access = "constructor", position = 1 }
            "#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("com.example.Point"));
    }

    #[test]
    fn test_excluded_members_ignored() {
        let diagnostics = check(
            r#"
            [project]
            name = "shop"

            [[declaration]]
            name = "com.example.Point"
            builder = {}

            [[declaration.member]]
            name = "x"
            type = "int"
            property = { access = "constructor", position = 0 }

            [[declaration.member]]
            name = "y"
            type = "int"
            property = { access = "constructor", position = 0, include = false }
            "#,
        );
        assert!(diagnostics.is_empty());
    }
}
