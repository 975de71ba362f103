//! Shared utility functions for code generation.

/// Uppercase the first character (e.g., "label" -> "Label")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character (e.g., "Widget" -> "widget")
pub fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Split a qualified name into `(package, simple_name)`.
///
/// Names without a dot live in the unnamed package, which is returned as `""`.
pub fn split_qualified(qualified: &str) -> (&str, &str) {
    match qualified.rfind('.') {
        Some(idx) => (&qualified[..idx], &qualified[idx + 1..]),
        None => ("", qualified),
    }
}

/// Join a package and a simple name (e.g., ("com.example", "Widget") -> "com.example.Widget")
pub fn join_qualified(package: &str, simple_name: &str) -> String {
    if package.is_empty() {
        simple_name.to_string()
    } else {
        format!("{}.{}", package, simple_name)
    }
}
