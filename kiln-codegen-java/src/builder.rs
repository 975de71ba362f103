//! The `Builder.stencil` template.

use kiln_codegen::{builder::CodeBuilder, render::RenderContext};
use kiln_ir::{Accessor, PropertyDescriptor};

/// Template name of the builder stencil.
pub const BUILDER_TEMPLATE: &str = "Builder.stencil";

/// Render the Java source of a fluent builder.
///
/// Constructor properties are passed to the entity constructor in position
/// order, setter properties go through `set<Name>` and direct properties
/// are assigned as fields.
pub fn builder_source(ctx: &RenderContext) -> String {
    let model = &ctx.builder;
    let declaration = &ctx.declaration;
    let entity = model.entity_name();
    let implementation = model.implementation_name();
    let package = model.implementation_package();
    let instance = model.uncapitalized_entity_name();

    let import_entity = !declaration.package.is_empty() && declaration.package != package;
    let properties = model.properties();

    CodeBuilder::java()
        .when(!package.is_empty(), |b| {
            b.line(&format!("package {};", package)).blank()
        })
        .when(import_entity, |b| {
            b.line(&format!("import {};", declaration.qualified_name))
                .blank()
        })
        .javadoc(&format!("Builder for {{@link {}}}.", entity))
        .braced(&format!("public final class {}", implementation), |b| {
            b.blank()
                .when(!properties.is_empty(), |b| {
                    b.each(properties, |b, p| b.line(&field(p))).blank()
                })
                .braced(&format!("private {}()", implementation), |b| b)
                .blank()
                .braced(
                    &format!("public static {} {}()", implementation, instance),
                    |b| b.line(&format!("return new {}();", implementation)),
                )
                .each(properties, |b, p| {
                    b.blank().braced(
                        &format!(
                            "public {} {}({} {})",
                            implementation,
                            p.method_name(),
                            p.ty().name(),
                            p.name()
                        ),
                        |b| {
                            b.line(&format!("this.{0} = {0};", p.name()))
                                .line("return this;")
                        },
                    )
                })
                .blank()
                .braced(&format!("public {} build()", entity), |b| {
                    b.line(&format!(
                        "{} {} = new {}({});",
                        entity,
                        instance,
                        entity,
                        model.constructor_signature()
                    ))
                    .each(properties, |b, p| match assignment(&instance, p) {
                        Some(line) => b.line(&line),
                        None => b,
                    })
                    .line(&format!("return {};", instance))
                })
        })
        .build()
}

fn field(property: &PropertyDescriptor) -> String {
    match property.default_value() {
        Some(value) => format!(
            "private {} {} = {};",
            property.ty().name(),
            property.name(),
            value
        ),
        None => format!("private {} {};", property.ty().name(), property.name()),
    }
}

/// Statement applying a property to the built instance, if it is not a
/// constructor argument.
fn assignment(instance: &str, property: &PropertyDescriptor) -> Option<String> {
    match property.accessor() {
        Accessor::Setter { setter_name } => {
            Some(format!("{}.{}({});", instance, setter_name, property.name()))
        }
        Accessor::Direct => Some(format!("{0}.{1} = {1};", instance, property.name())),
        Accessor::Constructor { .. } | Accessor::None => None,
    }
}
