use crate::error::{NotegraphError, Result};

/// Path stem that marks a directory index document.
pub const INDEX_STEM: &str = "index";

/// Derives the identity key for a document from the run namespace and its
/// source path.
///
/// The extension is stripped from the final segment, and an index document
/// with a parent directory folds onto that directory (an index page is the
/// node for its folder). A top-level `index` keeps its stem: `index.md`
/// under namespace `Site` keys as `Site/index`, never bare `Site`.
pub fn build_key(namespace: &str, source_path: &str) -> Result<String> {
    if source_path.trim().is_empty() {
        return Err(NotegraphError::InvalidPath(source_path.to_string()));
    }

    let normalized = source_path.trim().replace('\\', "/");
    let mut rest = normalized.as_str();
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }
    let rest = rest.trim_start_matches('/').trim_end_matches('/');
    if rest.is_empty() {
        return Err(NotegraphError::InvalidPath(source_path.to_string()));
    }

    let mut segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
    if let Some(last) = segments.last_mut() {
        *last = strip_extension(*last);
    }
    if segments.len() > 1 && segments.last().copied() == Some(INDEX_STEM) {
        segments.pop();
    }

    Ok(format!("{}/{}", namespace, segments.join("/")))
}

/// Strips the final extension of a path segment. A leading dot (hidden file)
/// is not an extension separator.
fn strip_extension(segment: &str) -> &str {
    match segment.rfind('.') {
        Some(0) | None => segment,
        Some(pos) => &segment[..pos],
    }
}
