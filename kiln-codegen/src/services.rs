//! Service manifest aggregation.
//!
//! Collects, across one batch of declarations, which implementations provide
//! each capability, and renders one line-delimited manifest per capability.

use std::io::Write;

use indexmap::{IndexMap, IndexSet};
use kiln_core::Filer;
use kiln_ir::Declaration;
use tracing::debug;

use crate::{Error, Result};

/// Base directory of service manifests, relative to the output root.
pub const SERVICES_DIR: &str = "META-INF/services";

/// Path of the manifest for a capability (e.g., "META-INF/services/com.example.Part").
pub fn manifest_path(capability: &str) -> String {
    format!("{}/{}", SERVICES_DIR, capability)
}

/// Capability to implementations map for one batch.
///
/// Capabilities keep first-seen order; implementations keep accumulation
/// order and are never deduplicated.
#[derive(Debug, Clone, Default)]
pub struct ServiceAggregator {
    services: IndexMap<String, Vec<String>>,
}

impl ServiceAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration under its capabilities.
    ///
    /// An explicit `capability` wins; otherwise the set of directly
    /// implemented interfaces of the declaration is used, in declaration
    /// order. Returns the capabilities the declaration was recorded under.
    pub fn accumulate(&mut self, declaration: &Declaration, capability: Option<&str>) -> Vec<String> {
        let capabilities: Vec<String> = match capability.filter(|c| !c.is_empty()) {
            Some(capability) => vec![capability.to_string()],
            None => declaration
                .interfaces
                .iter()
                .cloned()
                .collect::<IndexSet<_>>()
                .into_iter()
                .collect(),
        };

        for capability in &capabilities {
            self.add(capability, &declaration.qualified_name);
        }
        capabilities
    }

    /// Append one implementation to a capability.
    pub fn add(&mut self, capability: &str, implementation: &str) {
        self.services
            .entry(capability.to_string())
            .or_default()
            .push(implementation.to_string());
    }

    /// Implementations recorded for a capability so far.
    pub fn implementations(&self, capability: &str) -> &[String] {
        self.services
            .get(capability)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Number of distinct capabilities.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Render every manifest and reset the aggregator for the next batch.
    pub fn flush(&mut self) -> IndexMap<String, String> {
        self.services
            .drain(..)
            .map(|(capability, implementations)| (capability, manifest_text(&implementations)))
            .collect()
    }
}

/// One implementation per line, each line terminated.
fn manifest_text(implementations: &[String]) -> String {
    let mut text = String::new();
    for implementation in implementations {
        text.push_str(implementation);
        text.push('\n');
    }
    text
}

/// Write one manifest through the filer. Returns the written path.
pub fn write_manifest(filer: &dyn Filer, capability: &str, text: &str) -> Result<String> {
    let path = manifest_path(capability);
    debug!(%path, "writing service manifest");

    let write = || -> std::io::Result<()> {
        let mut sink = filer.create_resource(&path)?;
        let written = sink.write_all(text.as_bytes());
        let closed = sink.close();
        written.and(closed)
    };

    write().map_err(|source| Error::ManifestWrite {
        capability: capability.to_string(),
        source,
    })?;
    Ok(path)
}
