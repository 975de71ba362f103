//! Manifest types and parsing for kiln.toml files.

mod declaration;
mod file;
mod parse;
mod validate;

pub use declaration::{
    BuilderSupport, DEFAULT_BUILDER_TEMPLATE, DeclarationConfig, MemberConfig, MemberKindConfig,
    ServiceSupport,
};
pub use file::KilnToml;
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for kiln.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project metadata
    pub project: ProjectConfig,

    /// Declarations of this processing round, in batch order
    #[serde(default, rename = "declaration")]
    pub declarations: Vec<DeclarationConfig>,
}

/// Project metadata configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project name
    pub name: String,

    /// Output directory for generated artifacts, relative to the manifest
    #[serde(default = "default_output")]
    pub output: String,

    /// File extension of generated source artifacts
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_output() -> String {
    "generated".to_string()
}

fn default_extension() -> String {
    "java".to_string()
}

impl Manifest {
    /// Find a declaration by qualified name
    pub fn declaration(&self, name: &str) -> Option<&DeclarationConfig> {
        self.declarations.iter().find(|d| d.name == name)
    }

    /// Declarations marked for builder generation
    pub fn builders(&self) -> impl Iterator<Item = &DeclarationConfig> {
        self.declarations.iter().filter(|d| d.builder.is_some())
    }

    /// Declarations marked for service registration
    pub fn services(&self) -> impl Iterator<Item = &DeclarationConfig> {
        self.declarations.iter().filter(|d| d.service.is_some())
    }
}
