use crate::model::NoteGraph;
use petgraph::graph::NodeIndex;

/// Maps a wikilink target phrase to a registered node.
///
/// Candidate policy, first hit wins and the order must not change:
/// 1. final key segment (slug), case-insensitive;
/// 2. document title, case-insensitive;
/// 3. unresolved.
///
/// Ties within a tier go to the first-registered node. Unresolved is a
/// normal outcome (forward or dangling references), never an error;
/// `current_key` only feeds the diagnostic trace.
pub fn resolve(raw_target: &str, current_key: &str, graph: &NoteGraph) -> Option<NodeIndex> {
    let needle = raw_target.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(idx) = graph.first_by_slug(&needle) {
        return Some(idx);
    }
    if let Some(idx) = graph.first_by_title(&needle) {
        return Some(idx);
    }

    tracing::debug!(reference = %raw_target, from = %current_key, "unresolved wikilink");
    None
}
