use crate::error::{NotegraphError, Result};
use crate::model::node::{BASE_SYMBOL_SIZE, LinkEdge, NoteNode};
use indexmap::IndexMap;
use notegraph_api::models::{GraphPayload, LinkExport, NodeExport};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Node registry and link topology for one run.
///
/// Append-only: nodes are registered in input order and never removed, so
/// petgraph node indices stay dense and double as the exported integer ids.
/// Edge insertion order is preserved by petgraph and doubles as link
/// discovery order.
#[derive(Debug, Clone, Default)]
pub struct NoteGraph {
    topology: DiGraph<NoteNode, LinkEdge>,
    /// Identity key -> node, the sole source of truth for "does this exist".
    key_map: HashMap<String, NodeIndex>,
    /// Lowercased final key segment -> nodes, in registration order.
    slug_map: HashMap<String, Vec<NodeIndex>>,
    /// Lowercased title -> nodes, in registration order.
    title_map: HashMap<String, Vec<NodeIndex>>,
}

impl NoteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Registration (pass 1) ----

    /// Inserts a new node under `key` with the next dense id.
    ///
    /// A duplicate key signals an upstream data-integrity problem and fails
    /// the whole run.
    pub fn register(
        &mut self,
        key: String,
        title: &str,
        url: &str,
        is_index: bool,
    ) -> Result<NodeIndex> {
        if self.key_map.contains_key(&key) {
            return Err(NotegraphError::DuplicateKey(key));
        }

        let node = NoteNode::new(key.clone(), title.to_string(), url.to_string(), is_index);
        let slug = node.slug().to_lowercase();
        let title_lower = title.to_lowercase();

        let idx = self.topology.add_node(node);
        self.key_map.insert(key, idx);
        self.slug_map.entry(slug).or_default().push(idx);
        self.title_map.entry(title_lower).or_default().push(idx);
        Ok(idx)
    }

    // ---- Read-only accessors ----

    pub fn node_id(&self, key: &str) -> Option<NodeIndex> {
        self.key_map.get(key).copied()
    }

    pub fn node(&self, key: &str) -> Option<&NoteNode> {
        self.node_id(key).map(|idx| &self.topology[idx])
    }

    pub fn get_node(&self, idx: NodeIndex) -> Option<&NoteNode> {
        self.topology.node_weight(idx)
    }

    /// First-registered node whose key's final segment equals `slug_lower`.
    pub fn first_by_slug(&self, slug_lower: &str) -> Option<NodeIndex> {
        self.slug_map.get(slug_lower)?.first().copied()
    }

    /// First-registered node whose title equals `title_lower`.
    pub fn first_by_title(&self, title_lower: &str) -> Option<NodeIndex> {
        self.title_map.get(title_lower)?.first().copied()
    }

    /// All nodes in id (registration) order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &NoteNode)> {
        self.topology
            .node_indices()
            .map(move |idx| (idx, &self.topology[idx]))
    }

    /// All links in discovery order.
    pub fn links(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, &LinkEdge)> {
        self.topology
            .edge_references()
            .map(|edge| (edge.source(), edge.target(), edge.weight()))
    }

    pub fn node_count(&self) -> usize {
        self.topology.node_count()
    }

    pub fn link_count(&self) -> usize {
        self.topology.edge_count()
    }

    // ---- Linking (pass 2) ----

    /// Appends a resolved reference. Parallel edges and self-loops are kept;
    /// every in-text occurrence is one link.
    pub fn add_link(&mut self, source: NodeIndex, target: NodeIndex, alias: Option<String>) {
        self.topology.add_edge(source, target, LinkEdge::new(alias));
    }

    // ---- Metrics (pass 3) ----

    /// Recomputes every node's visual weight from its total incident link
    /// count. A self-link counts on both sides.
    pub fn recompute_sizes(&mut self) {
        for idx in self.topology.node_indices() {
            let degree = self
                .topology
                .edges_directed(idx, Direction::Incoming)
                .count()
                + self
                    .topology
                    .edges_directed(idx, Direction::Outgoing)
                    .count();
            self.topology[idx].size = BASE_SYMBOL_SIZE + degree;
        }
    }

    // ---- Export ----

    /// Produces the wire payload for the visualization consumer.
    pub fn to_payload(&self) -> GraphPayload {
        let mut nodes = IndexMap::with_capacity(self.topology.node_count());
        for idx in self.topology.node_indices() {
            let node = &self.topology[idx];
            nodes.insert(
                node.key.clone(),
                NodeExport {
                    id: idx.index(),
                    symbol_size: node.size,
                    is_index: node.is_index,
                },
            );
        }

        let links = self
            .topology
            .edge_references()
            .map(|edge| LinkExport::new(edge.source().index(), edge.target().index()))
            .collect();

        GraphPayload::new(nodes, links)
    }

    /// Serializes the wire payload to a JSON value.
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.to_payload())?)
    }
}
