//! Artifact sinks and the factories that open them.
//!
//! A [`Sink`] is a writer with an explicit close step. Whoever opens a sink
//! owns it: renderers writing into a caller-supplied sink never close it,
//! renderers given a freshly opened sink always do.

use std::{
    cell::RefCell,
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    rc::Rc,
};

use crate::utils::split_qualified;

/// A writable artifact with an explicit close step.
pub trait Sink: Write {
    /// Flush and release the artifact. Closing twice is a no-op.
    fn close(&mut self) -> io::Result<()>;
}

/// Factory for artifact sinks.
pub trait Filer {
    /// Open a source artifact for the given qualified type name.
    ///
    /// `origin` is the qualified name of the declaration the artifact is
    /// generated from.
    fn create_source(&self, qualified_name: &str, origin: Option<&str>) -> io::Result<Box<dyn Sink>>;

    /// Open a resource artifact at a path relative to the output root.
    fn create_resource(&self, relative_path: &str) -> io::Result<Box<dyn Sink>>;
}

/// Relative path of a source artifact (e.g., "com.example.Widget" -> "com/example/Widget.java")
pub fn source_path(qualified_name: &str, extension: &str) -> PathBuf {
    let (package, simple_name) = split_qualified(qualified_name);
    let mut path = PathBuf::new();
    for segment in package.split('.').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push(format!("{}.{}", simple_name, extension));
    path
}

fn closed_error() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "sink already closed")
}

/// Buffered file sink.
pub struct FileSink {
    path: PathBuf,
    writer: Option<BufWriter<fs::File>>,
}

impl FileSink {
    /// Create (or truncate) the file, creating parent directories as needed.
    pub fn create(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(&path)?;
        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn writer(&mut self) -> io::Result<&mut BufWriter<fs::File>> {
        self.writer.as_mut().ok_or_else(closed_error)
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer()?.flush()
    }
}

impl Sink for FileSink {
    fn close(&mut self) -> io::Result<()> {
        match self.writer.take() {
            Some(mut writer) => writer.flush(),
            None => Ok(()),
        }
    }
}

/// Filer writing artifacts below an output directory.
#[derive(Debug, Clone)]
pub struct DirFiler {
    root: PathBuf,
    extension: String,
}

impl DirFiler {
    /// Create a filer rooted at `root`, naming source files with `extension`.
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// Get the output root
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Filer for DirFiler {
    fn create_source(
        &self,
        qualified_name: &str,
        _origin: Option<&str>,
    ) -> io::Result<Box<dyn Sink>> {
        let path = self.root.join(source_path(qualified_name, &self.extension));
        Ok(Box::new(FileSink::create(path)?))
    }

    fn create_resource(&self, relative_path: &str) -> io::Result<Box<dyn Sink>> {
        Ok(Box::new(FileSink::create(self.root.join(relative_path))?))
    }
}

/// An artifact captured by [`MemoryFiler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Relative path from the output root
    pub path: String,
    /// Declaration the artifact was generated from, if any
    pub origin: Option<String>,
    /// Content written before the sink was closed
    pub content: String,
}

/// Filer that keeps closed artifacts in memory (dry runs and tests).
///
/// An artifact only becomes visible once its sink is closed.
#[derive(Debug, Clone)]
pub struct MemoryFiler {
    extension: String,
    artifacts: Rc<RefCell<Vec<Artifact>>>,
}

impl MemoryFiler {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            artifacts: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Closed artifacts in the order they were closed.
    pub fn artifacts(&self) -> Vec<Artifact> {
        self.artifacts.borrow().clone()
    }

    /// Find a closed artifact by relative path.
    pub fn get(&self, path: &str) -> Option<Artifact> {
        self.artifacts
            .borrow()
            .iter()
            .find(|a| a.path == path)
            .cloned()
    }

    fn open(&self, path: String, origin: Option<&str>) -> MemorySink {
        MemorySink {
            path,
            origin: origin.map(str::to_string),
            buffer: Some(Vec::new()),
            store: Rc::clone(&self.artifacts),
        }
    }
}

impl Filer for MemoryFiler {
    fn create_source(&self, qualified_name: &str, origin: Option<&str>) -> io::Result<Box<dyn Sink>> {
        let path = source_path(qualified_name, &self.extension);
        Ok(Box::new(
            self.open(path.to_string_lossy().replace('\\', "/"), origin),
        ))
    }

    fn create_resource(&self, relative_path: &str) -> io::Result<Box<dyn Sink>> {
        Ok(Box::new(self.open(relative_path.to_string(), None)))
    }
}

/// Sink handed out by [`MemoryFiler`].
pub struct MemorySink {
    path: String,
    origin: Option<String>,
    buffer: Option<Vec<u8>>,
    store: Rc<RefCell<Vec<Artifact>>>,
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let buffer = self.buffer.as_mut().ok_or_else(closed_error)?;
        buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buffer.is_none() {
            return Err(closed_error());
        }
        Ok(())
    }
}

impl Sink for MemorySink {
    fn close(&mut self) -> io::Result<()> {
        if let Some(buffer) = self.buffer.take() {
            self.store.borrow_mut().push(Artifact {
                path: self.path.clone(),
                origin: self.origin.clone(),
                content: String::from_utf8_lossy(&buffer).into_owned(),
            });
        }
        Ok(())
    }
}
