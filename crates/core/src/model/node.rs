use serde::{Deserialize, Serialize};

/// Baseline visual weight before any links are counted.
pub const BASE_SYMBOL_SIZE: usize = 1;

/// Graph vertex representing one document.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NoteNode {
    /// Unique identifier (namespace-qualified, index-folded).
    pub key: String,
    /// Display title as supplied by the host.
    pub title: String,
    /// Rendered destination reference.
    pub url: String,
    pub is_index: bool,
    /// Visual-weight hint; recomputed once after all links are known.
    pub size: usize,
}

impl NoteNode {
    pub fn new(key: String, title: String, url: String, is_index: bool) -> Self {
        Self {
            key,
            title,
            url,
            is_index,
            size: BASE_SYMBOL_SIZE,
        }
    }

    /// Final path segment of the identity key, the slug a wikilink target
    /// is matched against.
    pub fn slug(&self) -> &str {
        self.key.rsplit('/').next().unwrap_or(&self.key)
    }
}

/// Directed edge representing one resolved reference.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LinkEdge {
    /// Display alias carried by the originating wikilink, if any.
    pub alias: Option<String>,
}

impl LinkEdge {
    pub fn new(alias: Option<String>) -> Self {
        Self { alias }
    }
}
