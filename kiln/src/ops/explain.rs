//! Explain operation - property classification per builder.

use std::path::Path;

use eyre::{Context, Result, bail};
use kiln_codegen::pipeline::{Pipeline, phases::ValidatePhase};
use kiln_ir::{Accessor, PropertyDescriptor};
use kiln_manifest::Manifest;

use crate::reports::{
    BuilderInfo, ExplainReport, LintInfo, PhaseInfo, PropertyInfo, ServiceInfo,
};

/// Execute the explain operation.
///
/// Runs the pipeline and describes every builder it would generate.
/// `only` restricts the builders to one declaration, matched by qualified
/// or simple name.
pub fn explain(manifest: &Manifest, config_path: &Path, only: Option<&str>) -> Result<ExplainReport> {
    let pipeline = Pipeline::new();
    let validate_phase = ValidatePhase::new();

    let phases = pipeline
        .phase_info()
        .into_iter()
        .map(|p| PhaseInfo {
            name: p.name.to_string(),
            description: p.description.to_string(),
        })
        .collect();

    let lints = validate_phase
        .lint_info()
        .into_iter()
        .map(|l| LintInfo {
            name: l.name.to_string(),
            description: l.description.to_string(),
        })
        .collect();

    let mut ctx = pipeline.run(manifest.clone()).wrap_err("Pipeline failed")?;
    let plan = ctx.take_plan()?;

    let builders: Vec<BuilderInfo> = plan
        .builders
        .iter()
        .filter(|job| {
            only.is_none_or(|name| {
                job.context.declaration.qualified_name == name
                    || job.context.declaration.simple_name == name
            })
        })
        .map(|job| {
            let model = &job.context.builder;
            BuilderInfo {
                declaration: job.origin().to_string(),
                implementation: model.canonical_implementation_name(),
                template: job.template.clone(),
                constructor_signature: model.constructor_signature(),
                properties: model.properties().iter().map(property_info).collect(),
            }
        })
        .collect();

    if let Some(name) = only
        && builders.is_empty()
    {
        bail!("no builder declaration named '{}'", name);
    }

    let services = plan
        .manifests
        .iter()
        .map(|(capability, text)| ServiceInfo {
            capability: capability.clone(),
            implementations: text.lines().map(str::to_string).collect(),
        })
        .collect();

    Ok(ExplainReport {
        config_path: config_path.to_path_buf(),
        project_name: manifest.project.name.clone(),
        phases,
        lints,
        builders,
        services,
    })
}

fn property_info(property: &PropertyDescriptor) -> PropertyInfo {
    PropertyInfo {
        name: property.name().to_string(),
        type_name: property.ty().name().to_string(),
        method: property.method_name().to_string(),
        access: access_description(property.accessor()),
        default_value: property.default_value().map(str::to_string),
    }
}

fn access_description(accessor: &Accessor) -> String {
    match accessor {
        Accessor::None => "excluded".to_string(),
        Accessor::Direct => "direct".to_string(),
        Accessor::Setter { setter_name } => format!("setter {}()", setter_name),
        Accessor::Constructor { position } => format!("constructor #{}", position),
    }
}
