//! Bake command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from artifact generation.
#[derive(Debug)]
pub struct BakeReport {
    /// Project name from manifest.
    pub project_name: String,

    /// Warning messages from pipeline.
    pub warnings: Vec<String>,

    /// Generated builders (e.g., "com.example.WidgetBuilder (Builder.stencil)").
    pub builders: Vec<String>,

    /// Written service manifests.
    pub manifests: Vec<String>,

    /// Per-declaration or per-capability failures.
    pub failures: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of artifact generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path, relative to the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }

        for failure in &self.failures {
            out.error(failure);
        }
    }
}

impl BakeReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&self.project_name);
        out.newline();

        out.section(&format!("Builders ({})", self.builders.len()));
        for builder in &self.builders {
            out.added_item(builder);
        }
        out.newline();

        out.section(&format!("Service manifests ({})", self.manifests.len()));
        for manifest in &self.manifests {
            out.added_item(manifest);
        }
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_written_summary() {
        let report = BakeReport {
            project_name: "shop".to_string(),
            warnings: vec![],
            builders: vec!["com.example.WidgetBuilder (Builder.stencil)".to_string()],
            manifests: vec![],
            failures: vec!["com.example.Gadget: unsupported template".to_string()],
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("generated"),
            }),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "shop",
                "",
                "Builders (1):",
                "  + com.example.WidgetBuilder (Builder.stencil)",
                "",
                "Service manifests (0):",
                "",
                "Generated: generated",
                "error: com.example.Gadget: unsupported template",
            ]
        );
    }
}
