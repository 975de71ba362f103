//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest, so nested validation can report where it failed.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "kiln.toml");
/// ctx.validate_qualified_name("com.example.Widget", "declaration")?;
///
/// let nested = ctx.push("com.example.Widget");
/// nested.validate_name("label", "member")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a slash-separated string.
    pub fn path_string(&self) -> String {
        self.path.join("/")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "member in 'com.example.Widget'" or just "declaration" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the first span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name, false)
    }

    /// Find the last span of a name in the source (for repeated names).
    pub fn find_last_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name, true)
    }

    /// Validate that a name is a valid, non-reserved identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_java_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate a dot-separated qualified name segment by segment.
    pub fn validate_qualified_name(&self, name: &str, kind: &str) -> Result<()> {
        if name.is_empty() {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                "name cannot be empty",
                None,
            ));
        }

        for segment in name.split('.') {
            if is_java_keyword(segment) {
                return Err(self.source.reserved_keyword_error(
                    segment,
                    self.context_for(kind),
                    self.find_span(name),
                ));
            }
            if let Some(reason) = validate_identifier(segment) {
                return Err(self.source.invalid_identifier_error(
                    name,
                    self.context_for(kind),
                    reason,
                    self.find_span(name),
                ));
            }
        }

        Ok(())
    }
}

/// Reserved words of the generated language
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while",
    // Literals
    "true", "false", "null",
    // Underscore alone is reserved since Java 9
    "_",
];

/// Check if a name is a reserved word
pub(crate) fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Find the span of a quoted name in the TOML source
///
/// Names are always string values in kiln.toml (`name = "label"`,
/// `interfaces = ["com.example.Part"]`), so only quoted occurrences match.
pub(crate) fn find_name_span(src: &str, name: &str, last: bool) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{name}{quote}");
        let found = if last {
            src.rfind(&pattern)
        } else {
            src.find(&pattern)
        };
        if let Some(pos) = found {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Validate that a name is a valid identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter, underscore or dollar sign
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, underscore or '$'"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_' || c == '$')) {
        return Some("name must contain only letters, digits, underscores and '$'");
    }

    None
}
