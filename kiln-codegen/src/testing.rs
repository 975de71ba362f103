//! Sink and renderer doubles for unit tests.

use std::{
    cell::{Cell, RefCell},
    io::{self, Write},
    rc::Rc,
};

use kiln_core::Sink;

use crate::{
    Error, Result,
    render::{RenderContext, Renderer},
};

/// Sink double that records content and counts close calls.
///
/// Clones share state, so a clone handed to code under test can be
/// inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct CountingSink {
    content: Rc<RefCell<Vec<u8>>>,
    closes: Rc<Cell<usize>>,
    fail_writes: bool,
}

impl CountingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write fail with `BrokenPipe`.
    pub fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Content written so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.content.borrow()).into_owned()
    }

    /// Number of `close` calls so far.
    pub fn close_count(&self) -> usize {
        self.closes.get()
    }

    /// Shared close counter, observable after the sink is moved away.
    pub fn close_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.closes)
    }
}

impl Write for CountingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink rejects writes"));
        }
        self.content.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Sink for CountingSink {
    fn close(&mut self) -> io::Result<()> {
        self.closes.set(self.closes.get() + 1);
        Ok(())
    }
}

thread_local! {
    static INITIALIZE_CALLS: Cell<usize> = const { Cell::new(0) };
}

/// Renderer double for `.test` templates that writes fixed output.
///
/// A failing renderer writes its output first and then fails, which
/// exercises the close-on-failure path mid-render.
#[derive(Debug, Clone)]
pub struct ScriptedRenderer {
    output: &'static str,
    fail: bool,
    suffixes: &'static [&'static str],
    template: Option<String>,
}

impl ScriptedRenderer {
    /// Renderer that writes `output` and succeeds.
    pub fn writing(output: &'static str) -> Self {
        Self {
            output,
            fail: false,
            suffixes: &[".test"],
            template: None,
        }
    }

    /// Renderer that writes `output` and then fails evaluation.
    pub fn failing_after(output: &'static str) -> Self {
        Self {
            fail: true,
            ..Self::writing(output)
        }
    }

    /// Override the handled suffixes.
    pub fn with_suffixes(mut self, suffixes: &'static [&'static str]) -> Self {
        self.suffixes = suffixes;
        self
    }

    /// Bind the template without going through `initialize`.
    pub fn bound(mut self, template: &str) -> Self {
        self.template = Some(template.to_string());
        self
    }

    /// Number of `initialize` calls made on this thread, across all instances.
    ///
    /// Factory-created instances are not reachable from the test, so the
    /// count is per thread. Compare before and after the call under test.
    pub fn initialize_calls() -> usize {
        INITIALIZE_CALLS.with(Cell::get)
    }
}

impl Renderer for ScriptedRenderer {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn supported_suffixes(&self) -> &[&'static str] {
        self.suffixes
    }

    fn initialize(&mut self, template: &str) -> Result<()> {
        INITIALIZE_CALLS.with(|calls| calls.set(calls.get() + 1));
        crate::render::check_initialize(&*self, template)?;
        self.template = Some(template.to_string());
        Ok(())
    }

    fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    fn evaluate(&self, _ctx: &RenderContext, out: &mut dyn Write) -> Result<()> {
        let template = self.template.as_deref().unwrap_or("<unbound>");
        out.write_all(self.output.as_bytes())
            .map_err(|e| Error::sink(template, e))?;
        if self.fail {
            return Err(Error::evaluation(template, "scripted failure"));
        }
        Ok(())
    }
}
