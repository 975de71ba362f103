//! Check operation - manifest validation.

use std::path::Path;

use kiln_codegen::pipeline::{CompilationContext, Phase, Severity, phases::ValidatePhase};
use kiln_manifest::Manifest;
use tracing::debug;

use super::diagnostic_message;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs every lint over the manifest and collects all diagnostics, errors
/// included.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let mut ctx = CompilationContext::new(manifest.clone());
    let validate = ValidatePhase::new();
    if let Err(err) = validate.run(&mut ctx) {
        debug!(%err, "validation failed");
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut notes = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = diagnostic_message(diag);
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Note => notes.push(msg),
        }
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        declaration_count: manifest.declarations.len(),
        builder_count: manifest.builders().count(),
        service_count: manifest.services().count(),
        errors,
        warnings,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_counts_and_warnings() {
        let manifest = Manifest::from_str(
            r#"
            [project]
            name = "shop"

            [[declaration]]
            name = "com.example.Widget"
            builder = {}

            [[declaration]]
            name = "com.example.Gadget"
            service = {}
            "#,
        )
        .unwrap();

        let report = check(&manifest, Path::new("kiln.toml"));

        assert!(report.is_valid());
        assert_eq!(report.declaration_count, 2);
        assert_eq!(report.builder_count, 1);
        assert_eq!(report.service_count, 1);
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].contains("No builder properties defined for"));
        assert!(report.warnings[1].ends_with("--> com.example.Gadget"));
    }
}
