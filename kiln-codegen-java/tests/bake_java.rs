//! Generates Java builders from a kiln.toml through the whole pipeline.

use std::str::FromStr;

use kiln_codegen::{Generator, pipeline::Pipeline};
use kiln_core::MemoryFiler;
use kiln_manifest::Manifest;

fn bake(toml: &str) -> MemoryFiler {
    let manifest = Manifest::from_str(toml).expect("Failed to parse manifest");
    let plan = Pipeline::new()
        .run(manifest)
        .and_then(|mut ctx| ctx.take_plan())
        .expect("Pipeline failed");

    let filer = MemoryFiler::new("java");
    let report = Generator::new(kiln_codegen_java::registry()).generate(&plan, &filer);
    assert!(report.is_success(), "failures: {:?}", report.failures);
    filer
}

#[test]
fn test_point_with_constructor_arguments() {
    let filer = bake(
        r#"
        [project]
        name = "geometry"

        [[declaration]]
        name = "org.geo.Point"
        builder = { package = "org.geo.gen" }

        [[declaration.member]]
        name = "y"
        type = "double"
        property = { access = "constructor", position = 1, default = "0.0" }

        [[declaration.member]]
        name = "x"
        type = "double"
        property = { access = "constructor", position = 0, default = "0.0" }

        [[declaration.member]]
        name = "tags"
        type = "java.util.List<String>"
        property = { prefix = "tagged", default = "new java.util.ArrayList<>()" }

        [[declaration.member]]
        name = "ORIGIN"
        type = "org.geo.Point"
        static = true
        "#,
    );

    let source = filer
        .get("org/geo/gen/PointBuilder.java")
        .expect("PointBuilder.java not found");
    assert_eq!(source.origin.as_deref(), Some("org.geo.Point"));

    insta::assert_snapshot!(source.content, @r"
    package org.geo.gen;

    import org.geo.Point;

    /** Builder for {@link Point}. */
    public final class PointBuilder {

        private double y = 0.0;
        private double x = 0.0;
        private java.util.List<String> tags = new java.util.ArrayList<>();

        private PointBuilder() {
        }

        public static PointBuilder point() {
            return new PointBuilder();
        }

        public PointBuilder withY(double y) {
            this.y = y;
            return this;
        }

        public PointBuilder withX(double x) {
            this.x = x;
            return this;
        }

        public PointBuilder taggedTags(java.util.List<String> tags) {
            this.tags = tags;
            return this;
        }

        public Point build() {
            Point point = new Point(x, y);
            point.setTags(tags);
            return point;
        }
    }
    ");
}

#[test]
fn test_builders_and_services_together() {
    let filer = bake(
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
        interfaces = ["com.example.Part"]
        service = {}
        "#,
    );

    let paths: Vec<_> = filer.artifacts().into_iter().map(|a| a.path).collect();
    assert_eq!(
        paths,
        vec![
            "com/example/WidgetBuilder.java",
            "META-INF/services/com.example.Part",
        ]
    );

    let manifest = filer.get("META-INF/services/com.example.Part").unwrap();
    insta::assert_snapshot!(manifest.content, @r"
    com.example.Widget
    com.example.Gadget
    ");
}
