//! Backend selection by template suffix.

use std::sync::{PoisonError, RwLock};

use tracing::debug;

use super::{JsonRenderer, Renderer};
use crate::{Error, Result};

/// Creates a fresh, uninitialized backend instance.
pub type RendererFactory = fn() -> Box<dyn Renderer>;

/// Backends available without any installation.
const BUNDLED: &[RendererFactory] = &[json_factory];

fn json_factory() -> Box<dyn Renderer> {
    Box::new(JsonRenderer::new())
}

/// Backends installed into the process, in installation order.
static INSTALLED: RwLock<Vec<RendererFactory>> = RwLock::new(Vec::new());

/// Suffix of a template name: everything from the last `.`, lowercased.
///
/// Names without a dot have an empty suffix.
pub fn suffix_of(template: &str) -> String {
    template
        .rfind('.')
        .map(|idx| template[idx..].to_lowercase())
        .unwrap_or_default()
}

/// Ordered set of backend factories.
///
/// Resolution walks the factories in registration order and returns the
/// first backend that supports the template, freshly created and initialized.
/// Instances are never cached, so template state cannot leak between calls.
#[derive(Clone, Default)]
pub struct RendererRegistry {
    factories: Vec<RendererFactory>,
}

impl RendererRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the bundled backends.
    pub fn bundled() -> Self {
        Self {
            factories: BUNDLED.to_vec(),
        }
    }

    /// Append a backend factory.
    pub fn register(&mut self, factory: RendererFactory) -> &mut Self {
        self.factories.push(factory);
        self
    }

    /// Append a backend factory (consuming).
    pub fn with(mut self, factory: RendererFactory) -> Self {
        self.register(factory);
        self
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Resolve an initialized backend for `template`.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedTemplate`] when no backend handles the suffix,
    /// [`Error::Initialize`] when the matching backend rejects the template.
    pub fn resolve(&self, template: &str) -> Result<Box<dyn Renderer>> {
        for factory in &self.factories {
            let mut renderer = factory();
            if renderer.supports(template) {
                debug!(template, backend = renderer.name(), "resolved renderer");
                renderer.initialize(template)?;
                return Ok(renderer);
            }
        }

        Err(Error::UnsupportedTemplate {
            template: template.to_string(),
        })
    }

    /// Suffixes handled by at least one backend, in registration order.
    pub fn supported_suffixes(&self) -> Vec<&'static str> {
        let mut suffixes = Vec::new();
        for factory in &self.factories {
            for suffix in factory().supported_suffixes() {
                if !suffixes.contains(suffix) {
                    suffixes.push(*suffix);
                }
            }
        }
        suffixes
    }
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("suffixes", &self.supported_suffixes())
            .finish()
    }
}

/// Add a backend to the process-wide provider list.
///
/// Installed backends follow the bundled ones and stay until [`reset`].
/// The next [`resolve`] (or [`registry`]) call observes it.
pub fn install(factory: RendererFactory) {
    INSTALLED
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .push(factory);
}

/// Forget every installed backend, leaving only the bundled ones.
pub fn reset() {
    INSTALLED
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}

/// Every live backend: the bundled ones, then everything installed so far.
///
/// Rebuilt on each call, so installs are seen without any explicit reload.
pub fn registry() -> RendererRegistry {
    let installed = INSTALLED.read().unwrap_or_else(PoisonError::into_inner);
    let mut factories = BUNDLED.to_vec();
    factories.extend_from_slice(&installed);
    RendererRegistry { factories }
}

/// Resolve a backend against the live process-wide providers.
pub fn resolve(template: &str) -> Result<Box<dyn Renderer>> {
    registry().resolve(template)
}
