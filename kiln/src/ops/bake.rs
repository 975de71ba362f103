//! Bake operation - artifact generation from manifest.

use std::path::Path;

use eyre::{Context, Result};
use kiln_codegen::{GenerateReport, Generator, pipeline::Pipeline, render};
use kiln_core::{DirFiler, MemoryFiler};
use kiln_manifest::Manifest;

use super::diagnostic_message;
use crate::reports::{
    BakeReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Output directory for generated artifacts.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the bake operation.
///
/// Runs the pipeline on the manifest and renders every artifact of the
/// resulting plan with the renderers of the process registry.
pub fn bake(manifest: &Manifest, opts: BakeOptions) -> Result<BakeReport> {
    let mut ctx = Pipeline::new()
        .run(manifest.clone())
        .wrap_err("Pipeline failed")?;

    let warnings = ctx.warnings().map(diagnostic_message).collect();
    let plan = ctx.take_plan()?;

    let generator = Generator::new(render::registry());
    let extension = &manifest.project.extension;

    let (generated, result) = if opts.dry_run {
        let filer = MemoryFiler::new(extension);
        let generated = generator.generate(&plan, &filer);
        let files = filer
            .artifacts()
            .into_iter()
            .map(|a| PreviewFile {
                path: a.path,
                content: a.content,
            })
            .collect();
        (generated, GenerationResult::Preview(PreviewResult { files }))
    } else {
        let filer = DirFiler::new(opts.output_dir, extension);
        let generated = generator.generate(&plan, &filer);
        let result = GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
        });
        (generated, result)
    };

    Ok(report(manifest, warnings, generated, result))
}

fn report(
    manifest: &Manifest,
    warnings: Vec<String>,
    generated: GenerateReport,
    result: GenerationResult,
) -> BakeReport {
    BakeReport {
        project_name: manifest.project.name.clone(),
        warnings,
        builders: generated
            .builders
            .iter()
            .map(|b| format!("{} ({})", b.target, b.template))
            .collect(),
        manifests: generated
            .manifests
            .iter()
            .map(|m| format!("{} ({} implementation(s))", m.path, m.implementations))
            .collect(),
        failures: generated
            .failures
            .iter()
            .map(|f| format!("{}: {}", f.subject, f.error))
            .collect(),
        result,
    }
}
