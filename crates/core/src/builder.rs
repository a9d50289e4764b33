use crate::error::Result;
use crate::identity::build_key;
use crate::model::{Document, NoteGraph};
use crate::parser::WikilinkScanner;
use crate::resolver;

/// One-shot graph-building session.
///
/// Constructed fresh per run and consumed by [`GraphBuilder::build`], so a
/// finished graph can never be re-entered with a stale registry.
pub struct GraphBuilder {
    namespace: String,
}

impl GraphBuilder {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Runs the three assembly phases over `docs` in input order.
    ///
    /// Registration must complete in full before any resolution so that
    /// forward references resolve against the finished registry. A fatal
    /// error (invalid path, duplicate key) aborts the run; no partial graph
    /// escapes.
    pub fn build(self, docs: &[Document]) -> Result<NoteGraph> {
        let mut graph = NoteGraph::new();

        // Phase 1: registration.
        let mut doc_nodes = Vec::with_capacity(docs.len());
        for doc in docs {
            let key = build_key(&self.namespace, &doc.source_path)?;
            let idx = graph.register(key, &doc.title, &doc.url, doc.is_index)?;
            doc_nodes.push(idx);
        }

        // Phase 2: linking against the frozen registry.
        let mut unresolved = 0usize;
        for (doc, &source) in docs.iter().zip(&doc_nodes) {
            let source_key = match graph.get_node(source) {
                Some(node) => node.key.clone(),
                None => continue,
            };
            for link in WikilinkScanner::new(&doc.content) {
                match resolver::resolve(&link.target, &source_key, &graph) {
                    Some(target) => graph.add_link(source, target, link.alias),
                    None => unresolved += 1,
                }
            }
        }

        // Phase 3: connectivity metrics.
        graph.recompute_sizes();

        tracing::info!(
            documents = docs.len(),
            nodes = graph.node_count(),
            links = graph.link_count(),
            unresolved,
            "graph assembled"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotegraphError;

    #[test]
    fn test_forward_reference_resolves() {
        // "Later" is registered after the document that references it.
        let docs = vec![
            Document::new("Early", "early.md", "/early/", "See [[Later]]."),
            Document::new("Later", "later.md", "/later/", ""),
        ];
        let graph = GraphBuilder::new("Site").build(&docs).unwrap();
        assert_eq!(graph.link_count(), 1);
    }

    #[test]
    fn test_duplicate_key_aborts_run() {
        // Same stem with different extensions collides after stripping.
        let docs = vec![
            Document::new("A", "page.md", "/page/", ""),
            Document::new("B", "page.txt", "/page-b/", ""),
        ];
        let err = GraphBuilder::new("Site").build(&docs).unwrap_err();
        assert!(matches!(err, NotegraphError::DuplicateKey(_)));
    }

    #[test]
    fn test_empty_path_aborts_run() {
        let docs = vec![Document::new("A", "", "/a/", "")];
        let err = GraphBuilder::new("Site").build(&docs).unwrap_err();
        assert!(matches!(err, NotegraphError::InvalidPath(_)));
    }

    #[test]
    fn test_unresolved_references_are_silent() {
        let docs = vec![Document::new(
            "Lonely",
            "lonely.md",
            "/lonely/",
            "Points at [[Nowhere]] and [[Nothing|really]].",
        )];
        let graph = GraphBuilder::new("Site").build(&docs).unwrap();
        assert_eq!(graph.link_count(), 0);
        assert_eq!(graph.node("Site/lonely").unwrap().size, 1);
    }

    #[test]
    fn test_alias_rides_on_the_edge() {
        let docs = vec![
            Document::new("A", "a.md", "/a/", "See [[b|the b page]]."),
            Document::new("B", "b.md", "/b/", ""),
        ];
        let graph = GraphBuilder::new("Site").build(&docs).unwrap();
        let (_, _, edge) = graph.links().next().unwrap();
        assert_eq!(edge.alias.as_deref(), Some("the b page"));
    }
}
