use serde::{Deserialize, Serialize};

/// One document descriptor handed over by the host pipeline.
///
/// Immutable for the duration of a run; the engine never reads anything from
/// disk itself.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Document {
    pub title: String,
    /// Source-relative path, unique within the run (e.g. `guides/setup.md`).
    pub source_path: String,
    /// Rendered destination reference (the host's absolute URL).
    pub url: String,
    /// Raw textual content, scanned for wikilinks.
    pub content: String,
    /// Whether this document is a directory index page.
    pub is_index: bool,
}

impl Document {
    pub fn new(
        title: impl Into<String>,
        source_path: impl Into<String>,
        url: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            source_path: source_path.into(),
            url: url.into(),
            content: content.into(),
            is_index: false,
        }
    }

    /// Marks this document as a directory index page.
    pub fn as_index(mut self) -> Self {
        self.is_index = true;
        self
    }
}
