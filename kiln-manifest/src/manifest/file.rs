use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Represents a kiln.toml file with both raw content and parsed manifest.
pub struct KilnToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl KilnToml {
    /// Open and parse a kiln.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Output directory, resolved relative to the manifest location.
    pub fn output_dir(&self) -> PathBuf {
        let base = self.path.parent().unwrap_or_else(|| Path::new("."));
        base.join(&self.manifest.project.output)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("kiln.toml");
        fs::write(&path, "[project]\nname = \"shop\"\noutput = \"out\"\n").unwrap();

        let file = KilnToml::open(&path).unwrap();
        assert_eq!(file.manifest().project.name, "shop");
        assert_eq!(file.output_dir(), temp.path().join("out"));
        assert!(file.content().contains("shop"));
    }

    #[test]
    fn test_open_missing() {
        let temp = TempDir::new().unwrap();
        let err = KilnToml::open(temp.path().join("missing.toml")).err().unwrap();
        assert!(matches!(*err, crate::Error::Io { .. }));
    }
}
