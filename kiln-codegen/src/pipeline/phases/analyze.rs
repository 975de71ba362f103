//! Analyze phase - builds generation models and service manifests.

use eyre::Result;
use tracing::{info, warn};

use crate::{
    model::build_model,
    pipeline::{Annotated, BuilderJob, CompilationContext, Phase, Plan},
    render::RenderContext,
    services::ServiceAggregator,
};

/// Phase that turns the processing round into a [`Plan`].
///
/// Must run after `LowerPhase`. Builder models are built per declaration;
/// service capabilities are accumulated across the whole round and flushed
/// once at the end.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Build generation models and aggregate service manifests"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let declarations = ctx.declarations.as_ref().ok_or_else(|| {
            eyre::eyre!("declarations not set - AnalyzePhase must run after LowerPhase")
        })?;

        let (plan, notes) = analyze(declarations);
        for note in notes {
            ctx.add_note(self.name(), note);
        }
        ctx.plan = Some(plan);
        Ok(())
    }
}

fn analyze(declarations: &[Annotated]) -> (Plan, Vec<String>) {
    let mut builders = Vec::new();
    let mut notes = Vec::new();
    let mut aggregator = ServiceAggregator::new();

    for annotated in declarations {
        let declaration = &annotated.declaration;

        if let Some(target) = &annotated.builder {
            info!(declaration = %declaration.qualified_name, "generating builder support");
            notes.push(format!(
                "Generating builder support for {}",
                declaration.simple_name
            ));

            let model = build_model(declaration, target.package.as_deref());
            if model.properties().is_empty() {
                warn!(declaration = %declaration.qualified_name, "no builder properties defined");
            }

            builders.push(BuilderJob {
                template: target.template.clone(),
                context: RenderContext::new(model, declaration.clone()),
            });
        }

        if let Some(target) = &annotated.service {
            aggregator.accumulate(declaration, target.capability.as_deref());
        }
    }

    let plan = Plan {
        builders,
        manifests: aggregator.flush(),
    };
    (plan, notes)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use kiln_manifest::Manifest;

    use super::*;
    use crate::pipeline::phases::LowerPhase;

    fn lowered(content: &str) -> CompilationContext {
        let manifest = Manifest::from_str(content).expect("Failed to parse test manifest");
        let mut ctx = CompilationContext::new(manifest);
        LowerPhase.run(&mut ctx).unwrap();
        ctx
    }

    #[test]
    fn test_analyze_builds_plan() {
        let mut ctx = lowered(
            r#"
            [project]
            name = "shop"

            [[declaration]]
            name = "com.example.Widget"
            interfaces = ["com.example.Part"]
            builder = {}
            service = {}

            [[declaration.member]]
            name = "id"
            type = "int"

            [[declaration]]
            name = "com.example.Gadget"
            service = { capability = "com.example.Part" }
            "#,
        );

        AnalyzePhase.run(&mut ctx).expect("analyze should succeed");
        let plan = ctx.plan.as_ref().unwrap();

        assert_eq!(plan.builders.len(), 1);
        assert_eq!(plan.builders[0].target(), "com.example.WidgetBuilder");
        assert_eq!(plan.builders[0].origin(), "com.example.Widget");
        assert_eq!(plan.builders[0].template, "Builder.stencil");
        assert_eq!(
            plan.manifests["com.example.Part"],
            "com.example.Widget\ncom.example.Gadget\n"
        );

        let notes: Vec<_> = ctx.diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(notes, vec!["Generating builder support for Widget"]);
    }

    #[test]
    fn test_analyze_requires_lower() {
        let manifest = Manifest::from_str("[project]\nname = \"shop\"").unwrap();
        let mut ctx = CompilationContext::new(manifest);

        assert!(AnalyzePhase.run(&mut ctx).is_err());
    }
}
