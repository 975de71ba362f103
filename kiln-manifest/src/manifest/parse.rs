//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "kiln.toml")
    }
}

impl Manifest {
    /// Parse a kiln.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a kiln.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    let mut seen: Vec<&str> = Vec::new();
    for declaration in &manifest.declarations {
        ctx.validate_qualified_name(&declaration.name, "declaration")?;

        if seen.contains(&declaration.name.as_str()) {
            return Err(ctx.source_context().duplicate_error(
                &declaration.name,
                "declaration",
                ctx.find_last_span(&declaration.name),
            ));
        }
        seen.push(&declaration.name);

        let decl_ctx = ctx.push(&declaration.name);
        declaration.validate(&decl_ctx)?;
    }

    Ok(())
}
