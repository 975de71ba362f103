//! The contract every rendering backend honors.

use std::io::{self, Write};

use kiln_core::Sink;

use super::{RenderContext, registry::suffix_of};
use crate::{Error, Result};

/// A rendering backend bound to one template.
///
/// Instances are single use: [`initialize`](Renderer::initialize) binds the
/// template once and every later call fails.
pub trait Renderer {
    /// Backend name, for logs.
    fn name(&self) -> &'static str;

    /// Lowercase suffixes this backend handles, including the dot (e.g., ".json").
    fn supported_suffixes(&self) -> &[&'static str];

    /// Bind the backend to a template.
    ///
    /// # Errors
    ///
    /// Fails when already initialized or when the template is not supported.
    fn initialize(&mut self, template: &str) -> Result<()>;

    /// The bound template, if initialized.
    fn template(&self) -> Option<&str>;

    /// Evaluate the bound template against `ctx`, streaming into `out`.
    fn evaluate(&self, ctx: &RenderContext, out: &mut dyn Write) -> Result<()>;

    /// Whether the template's suffix is handled by this backend.
    fn supports(&self, template: &str) -> bool {
        let suffix = suffix_of(template);
        self.supported_suffixes().iter().any(|s| *s == suffix)
    }

    /// Render into `sink`, closing it afterwards when `auto_close` is set.
    ///
    /// With `auto_close` the sink is closed exactly once on every exit path,
    /// including evaluation failures and panics. Evaluation errors surface as
    /// [`io::ErrorKind::Other`]; sink failures keep their original kind.
    fn render(&self, ctx: &RenderContext, sink: &mut dyn Sink, auto_close: bool) -> io::Result<()> {
        let mut guard = CloseGuard::new(sink, auto_close);
        self.evaluate(ctx, &mut guard).map_err(into_io)?;
        guard.flush()?;
        guard.finish()
    }

    /// Render into a writer owned by the caller. The writer stays open.
    fn generate_into_writer(&self, ctx: &RenderContext, writer: &mut dyn Sink) -> io::Result<()> {
        self.render(ctx, writer, false)
    }

    /// Render into a freshly opened artifact. The artifact is always closed.
    fn generate_into_artifact(&self, ctx: &RenderContext, mut artifact: Box<dyn Sink>) -> io::Result<()> {
        self.render(ctx, artifact.as_mut(), true)
    }
}

/// Check the common `initialize` preconditions of a backend.
pub fn check_initialize(renderer: &dyn Renderer, template: &str) -> Result<()> {
    if let Some(bound) = renderer.template() {
        return Err(Error::initialize(
            template,
            format!("{} renderer is already bound to '{}'", renderer.name(), bound),
        ));
    }
    if !renderer.supports(template) {
        return Err(Error::initialize(
            template,
            format!(
                "{} renderer handles {}",
                renderer.name(),
                renderer.supported_suffixes().join(", ")
            ),
        ));
    }
    Ok(())
}

/// Bound template or an evaluation error for an uninitialized backend.
pub fn bound_template(renderer: &dyn Renderer) -> Result<&str> {
    renderer
        .template()
        .ok_or_else(|| Error::evaluation("<unbound>", "renderer was not initialized"))
}

fn into_io(error: Error) -> io::Error {
    match error {
        Error::Sink { source, .. } => source,
        other => io::Error::other(other),
    }
}

/// Writer over a sink that optionally closes it when dropped.
struct CloseGuard<'a> {
    sink: &'a mut dyn Sink,
    armed: bool,
}

impl<'a> CloseGuard<'a> {
    fn new(sink: &'a mut dyn Sink, armed: bool) -> Self {
        Self { sink, armed }
    }

    /// Close now (when armed) and report the close result.
    fn finish(mut self) -> io::Result<()> {
        if self.armed {
            self.armed = false;
            self.sink.close()
        } else {
            Ok(())
        }
    }
}

impl Write for CloseGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

impl Drop for CloseGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            // The render error is reported, not the close error
            let _ = self.sink.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use kiln_ir::{Declaration, GenerationModel};

    use super::*;
    use crate::testing::{CountingSink, ScriptedRenderer};

    fn context() -> RenderContext {
        RenderContext::new(
            GenerationModel::new("Widget", "WidgetBuilder", "com.example", vec![]),
            Declaration::new("com.example.Widget"),
        )
    }

    #[test]
    fn test_auto_close_on_success() {
        let renderer = ScriptedRenderer::writing("hello").bound("Widget.test");
        let mut sink = CountingSink::new();

        renderer.render(&context(), &mut sink, true).unwrap();

        assert_eq!(sink.contents(), "hello");
        assert_eq!(sink.close_count(), 1);
    }

    #[test]
    fn test_auto_close_on_evaluation_failure() {
        let renderer = ScriptedRenderer::failing_after("partial").bound("Widget.test");
        let mut sink = CountingSink::new();

        let err = renderer.render(&context(), &mut sink, true).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::Other);
        let inner = err.get_ref().and_then(|e| e.downcast_ref::<Error>());
        assert!(matches!(inner, Some(Error::TemplateEvaluation { .. })));
        assert_eq!(sink.contents(), "partial");
        assert_eq!(sink.close_count(), 1);
    }

    #[test]
    fn test_no_close_without_auto_close() {
        let renderer = ScriptedRenderer::writing("hello").bound("Widget.test");
        let mut sink = CountingSink::new();

        renderer.generate_into_writer(&context(), &mut sink).unwrap();
        assert_eq!(sink.close_count(), 0);

        let failing = ScriptedRenderer::failing_after("").bound("Widget.test");
        assert!(failing.generate_into_writer(&context(), &mut sink).is_err());
        assert_eq!(sink.close_count(), 0);
    }

    #[test]
    fn test_sink_error_kind_preserved() {
        let renderer = ScriptedRenderer::writing("hello").bound("Widget.test");
        let mut sink = CountingSink::new().fail_writes();

        let err = renderer.render(&context(), &mut sink, true).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(sink.close_count(), 1);
    }

    #[test]
    fn test_generate_into_artifact_closes() {
        let renderer = ScriptedRenderer::failing_after("x").bound("Widget.test");
        let sink = CountingSink::new();
        let closes = sink.close_counter();

        assert!(
            renderer
                .generate_into_artifact(&context(), Box::new(sink))
                .is_err()
        );
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_initialize_twice_fails() {
        let mut renderer = ScriptedRenderer::writing("");
        renderer.initialize("Widget.test").unwrap();

        let err = renderer.initialize("Other.test").unwrap_err();
        assert!(matches!(err, Error::Initialize { .. }));
    }

    #[test]
    fn test_initialize_unsupported_fails() {
        let mut renderer = ScriptedRenderer::writing("");
        let err = renderer.initialize("Widget.vm").unwrap_err();
        assert!(matches!(err, Error::Initialize { .. }));
        assert!(renderer.template().is_none());
    }

    #[test]
    fn test_supports_is_case_insensitive() {
        let renderer = ScriptedRenderer::writing("");
        assert!(renderer.supports("Widget.test"));
        assert!(renderer.supports("Widget.TEST"));
        assert!(!renderer.supports("Widget.test.bak"));
        assert!(!renderer.supports("Widget"));
    }
}
