use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Exported node entry, shaped for the visualization consumer.
///
/// The field spelling (`symbolSize`, plain integer `id`) is a wire contract
/// with the downstream renderer and must not change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct NodeExport {
    /// Dense integer id, assigned in registration order.
    pub id: usize,
    /// Visual-weight hint derived from incident link count.
    #[serde(rename = "symbolSize")]
    pub symbol_size: usize,
    pub is_index: bool,
}

/// Directed link between two nodes, endpoints as stringified node ids.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct LinkExport {
    pub source: String,
    pub target: String,
}

impl LinkExport {
    pub fn new(source: usize, target: usize) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

/// The finished graph as handed to the host for serialization.
///
/// `nodes` maps identity key to its export entry and preserves registration
/// order; `links` preserves discovery order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, JsonSchema)]
pub struct GraphPayload {
    pub nodes: IndexMap<String, NodeExport>,
    pub links: Vec<LinkExport>,
}

impl GraphPayload {
    pub fn new(nodes: IndexMap<String, NodeExport>, links: Vec<LinkExport>) -> Self {
        Self { nodes, links }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}
