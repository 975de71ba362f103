//! Lint for service declarations that register nowhere.

use kiln_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns when a service declaration names no capability and implements no
/// interface, so it contributes to no manifest.
pub struct ServiceWithoutCapabilityLint;

impl Lint for ServiceWithoutCapabilityLint {
    fn name(&self) -> &'static str {
        "service-without-capability"
    }

    fn description(&self) -> &'static str {
        "Service declarations need a capability or an interface"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for config in manifest.services() {
            let has_capability = config
                .service
                .as_ref()
                .and_then(|s| s.capability())
                .is_some();

            if !has_capability && config.interfaces.is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "service '{}' has no capability and implements no interface",
                            config.name
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
        ServiceWithoutCapabilityLint.check(&manifest, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_service_without_anything() {
        let diagnostics = check(
            r#"
            [project]
            name = "shop"

            [[declaration]]
            name = "com.example.Lonely"
            service = {}
            "#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("com.example.Lonely"));
    }

    #[test]
    fn test_interface_or_capability_is_enough() {
        let diagnostics = check(
            r#"
            [project]
            name = "shop"

            [[declaration]]
            name = "com.example.A"
            interfaces = ["com.example.Part"]
            service = {}

            [[declaration]]
            name = "com.example.B"
            service = { capability = "com.example.Part" }
            "#,
        );
        assert!(diagnostics.is_empty());
    }
}
