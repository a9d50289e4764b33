use notegraph_core::model::Document;
use notegraph_core::{GraphBuilder, NotegraphError};
use serde_json::json;

fn page(title: &str, path: &str, url: &str, content: &str) -> Document {
    Document::new(title, path, url, content)
}

#[test]
fn test_collect_pages() {
    notegraph_core::logging::init_logging();

    // Mirrors the host-pipeline shape: a root index page plus one section.
    let docs = vec![
        page("Home", "index.md", "/index.html", "Hello").as_index(),
        page("About", "about.md", "/about/", "World"),
    ];
    let graph = GraphBuilder::new("TestSite").build(&docs).unwrap();

    assert!(graph.node("TestSite/index").is_some());
    assert!(graph.node("TestSite/about").is_some());
    assert_eq!(graph.node_count(), 2);

    // Dense 0-based ids in registration order.
    let ids: Vec<usize> = graph.nodes().map(|(idx, _)| idx.index()).collect();
    assert_eq!(ids, vec![0, 1]);
    assert!(graph.node("TestSite/index").unwrap().is_index);
}

#[test]
fn test_wikilink_resolves_to_stringified_ids() {
    let docs = vec![
        page("Source", "source.md", "/source/", "Link to [[target]]"),
        page("target", "target.md", "/target/", ""),
    ];
    let graph = GraphBuilder::new("TestSite").build(&docs).unwrap();
    let payload = graph.to_payload();

    assert_eq!(payload.links.len(), 1);
    assert_eq!(payload.links[0].source, "0");
    assert_eq!(payload.links[0].target, "1");
}

#[test]
fn test_directory_index_folds_and_is_linkable() {
    let docs = vec![
        page("Guides", "guides/index.md", "/guides/", "").as_index(),
        page("Intro", "intro.md", "/intro/", "Start with [[guides]]."),
    ];
    let graph = GraphBuilder::new("Site").build(&docs).unwrap();

    // The index page is the node for its folder.
    assert!(graph.node("Site/guides").is_some());
    assert!(graph.node("Site/guides/index").is_none());
    assert_eq!(graph.link_count(), 1);
}

#[test]
fn test_self_link() {
    let docs = vec![page(
        "Loop",
        "loop.md",
        "/loop/",
        "This page links to [[Loop]] itself.",
    )];
    let graph = GraphBuilder::new("Site").build(&docs).unwrap();
    let payload = graph.to_payload();

    assert_eq!(payload.links.len(), 1);
    assert_eq!(payload.links[0].source, payload.links[0].target);
}

#[test]
fn test_repeated_references_are_not_deduplicated() {
    let docs = vec![
        page("A", "a.md", "/a/", "[[b]] and [[b]] once more"),
        page("B", "b.md", "/b/", ""),
    ];
    let graph = GraphBuilder::new("Site").build(&docs).unwrap();
    assert_eq!(graph.link_count(), 2);
}

#[test]
fn test_symbol_sizes_grow_with_connectivity() {
    let docs = vec![
        page("Hub", "hub.md", "/hub/", "[[a]] [[b]]"),
        page("A", "a.md", "/a/", "[[hub]]"),
        page("B", "b.md", "/b/", ""),
    ];
    let graph = GraphBuilder::new("Site").build(&docs).unwrap();
    let payload = graph.to_payload();

    // hub: 2 out + 1 in; a: 1 out + 1 in; b: 1 in.
    assert_eq!(payload.nodes["Site/hub"].symbol_size, 4);
    assert_eq!(payload.nodes["Site/a"].symbol_size, 3);
    assert_eq!(payload.nodes["Site/b"].symbol_size, 2);
}

#[test]
fn test_wire_shape_is_exact() {
    let docs = vec![
        page("Source", "source.md", "/source/", "Link to [[target]]"),
        page("target", "target.md", "/target/", ""),
    ];
    let graph = GraphBuilder::new("TestSite").build(&docs).unwrap();
    let value = graph.to_json_value().unwrap();

    assert_eq!(
        value,
        json!({
            "nodes": {
                "TestSite/source": {"id": 0, "symbolSize": 2, "is_index": false},
                "TestSite/target": {"id": 1, "symbolSize": 2, "is_index": false},
            },
            "links": [
                {"source": "0", "target": "1"},
            ],
        })
    );
}

#[test]
fn test_unresolved_references_absent_from_links() {
    let docs = vec![
        page("A", "a.md", "/a/", "Good [[b]], bad [[missing]], broken [[dangling"),
        page("B", "b.md", "/b/", ""),
    ];
    let graph = GraphBuilder::new("Site").build(&docs).unwrap();
    let payload = graph.to_payload();

    assert_eq!(payload.links.len(), 1);
    assert_eq!(payload.links[0].target, "1");
}

#[test]
fn test_duplicate_source_paths_fail_the_run() {
    let docs = vec![
        page("One", "same.md", "/one/", ""),
        page("Two", "same.md", "/two/", ""),
    ];
    let err = GraphBuilder::new("Site").build(&docs).unwrap_err();
    assert!(matches!(err, NotegraphError::DuplicateKey(key) if key == "Site/same"));
}

#[test]
fn test_title_resolution_across_directories() {
    let docs = vec![
        page("Reading List", "notes/reading.md", "/notes/reading/", ""),
        page("Journal", "journal.md", "/journal/", "Continue the [[Reading List]]."),
    ];
    let graph = GraphBuilder::new("Site").build(&docs).unwrap();
    let payload = graph.to_payload();

    assert_eq!(payload.links.len(), 1);
    assert_eq!(payload.links[0].source, "1");
    assert_eq!(payload.links[0].target, "0");
}
