//! Explain command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from pipeline explanation.
#[derive(Debug)]
pub struct ExplainReport {
    /// Path to the manifest file.
    pub config_path: PathBuf,
    pub project_name: String,
    /// Pipeline phases.
    pub phases: Vec<PhaseInfo>,
    /// Validation lints.
    pub lints: Vec<LintInfo>,
    pub builders: Vec<BuilderInfo>,
    pub services: Vec<ServiceInfo>,
}

/// Information about a pipeline phase.
#[derive(Debug)]
pub struct PhaseInfo {
    /// Phase name.
    pub name: String,
    /// Phase description.
    pub description: String,
}

/// Information about a validation lint.
#[derive(Debug)]
pub struct LintInfo {
    /// Lint name.
    pub name: String,
    /// Lint description.
    pub description: String,
}

/// One builder that would be generated.
#[derive(Debug)]
pub struct BuilderInfo {
    /// Qualified name of the source declaration.
    pub declaration: String,
    /// Qualified name of the generated builder.
    pub implementation: String,
    pub template: String,
    /// Constructor arguments in position order (e.g., "x, y").
    pub constructor_signature: String,
    pub properties: Vec<PropertyInfo>,
}

/// A classified property.
#[derive(Debug)]
pub struct PropertyInfo {
    pub name: String,
    pub type_name: String,
    /// Builder method name (e.g., "withLabel").
    pub method: String,
    /// How the property reaches the built instance.
    pub access: String,
    pub default_value: Option<String>,
}

/// Implementations registered for one capability.
#[derive(Debug)]
pub struct ServiceInfo {
    pub capability: String,
    pub implementations: Vec<String>,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Kiln Pipeline Explanation");
        out.newline();

        out.key_value("Input", &self.config_path.display().to_string());
        out.key_value("Project", &self.project_name);
        out.newline();

        out.section("Pipeline Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", phase.name, phase.description));
        }
        out.newline();

        out.section("Validation Lints");
        for lint in &self.lints {
            out.list_item(&format!("{}: {}", lint.name, lint.description));
        }

        for builder in &self.builders {
            out.newline();
            out.section(&format!("{} -> {}", builder.declaration, builder.implementation));
            out.key_value_indented("template", &builder.template);
            out.key_value_indented("constructor", &format!("({})", builder.constructor_signature));
            for property in &builder.properties {
                let default = property
                    .default_value
                    .as_deref()
                    .map(|d| format!(" = {}", d))
                    .unwrap_or_default();
                out.list_item(&format!(
                    "{} {}{} via {}, {}",
                    property.type_name, property.name, default, property.method, property.access
                ));
            }
        }

        if !self.services.is_empty() {
            out.newline();
            out.section("Service Manifests");
            for service in &self.services {
                out.list_item(&format!(
                    "{}: {}",
                    service.capability,
                    service.implementations.join(", ")
                ));
            }
        }
    }
}
