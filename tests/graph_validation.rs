// tests/graph_validation.rs

use std::io::Write;

use serde_json::json;
use tempfile::{Builder, NamedTempFile};

use rowdag::errors::RowdagError;
use rowdag::graph::{load_and_validate_graph, Graph, GraphFormat};
use rowdag_test_utils::builders::GraphBuilder;

#[test]
fn dangling_edge_target_is_rejected() {
    let raw = GraphBuilder::new()
        .nodes(&["a", "b"])
        .edge("a", "b")
        .edge("b", "ghost")
        .raw();

    match Graph::try_from(raw) {
        Err(RowdagError::DanglingEdge { from, to, missing }) => {
            assert_eq!(from, "b");
            assert_eq!(to, "ghost");
            assert_eq!(missing, "ghost");
        }
        other => panic!("Expected DanglingEdge, got: {:?}", other),
    }
}

#[test]
fn dangling_edge_source_is_rejected() {
    let raw = GraphBuilder::new().node("a").edge("ghost", "a").raw();

    match Graph::try_from(raw) {
        Err(RowdagError::DanglingEdge { missing, .. }) => assert_eq!(missing, "ghost"),
        other => panic!("Expected DanglingEdge, got: {:?}", other),
    }
}

#[test]
fn duplicate_node_names_are_rejected() {
    let raw = GraphBuilder::new().nodes(&["a", "b", "a"]).raw();

    match Graph::try_from(raw) {
        Err(RowdagError::DuplicateNode(name)) => assert_eq!(name, "a"),
        other => panic!("Expected DuplicateNode, got: {:?}", other),
    }
}

#[test]
fn edge_index_groups_edges_by_target_in_order() {
    let graph = GraphBuilder::new()
        .nodes(&["r", "a", "b"])
        .edges(&[("b", "r"), ("b", "a"), ("a", "r"), ("a", "r")])
        .build();

    let r = graph.node_index("r").unwrap();
    let a = graph.node_index("a").unwrap();
    let b = graph.node_index("b").unwrap();

    assert_eq!(graph.index().incoming(r), &[0, 2, 3]);
    assert_eq!(graph.index().incoming(a), &[1]);
    assert!(graph.index().incoming(b).is_empty());
    assert_eq!(graph.index().endpoints(1), (b, a));
}

#[test]
fn json_graph_file_loads_with_attributes() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
  "nodes": [
    {{ "name": "lead_time", "title": "Lead time", "hours": 12 }},
    {{ "name": "design", "row": "row4" }}
  ],
  "edges": [
    {{ "source": "design", "target": "lead_time" }}
  ]
}}"#
    )
    .unwrap();

    let graph = load_and_validate_graph(file.path()).unwrap();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.nodes()[0].attrs["title"], json!("Lead time"));
    assert_eq!(graph.nodes()[0].attrs["hours"], json!(12));
    // Rows from earlier runs are dropped on load.
    assert!(graph.nodes()[1].attrs.is_empty());
}

#[test]
fn toml_graph_file_loads() {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[[nodes]]
name = "lead_time"

[[nodes]]
name = "build"
owner = "ci"

[[edges]]
source = "build"
target = "lead_time"
"#
    )
    .unwrap();

    assert_eq!(GraphFormat::from_path(file.path()), GraphFormat::Toml);

    let graph = load_and_validate_graph(file.path()).unwrap();

    assert_eq!(graph.node_index("build"), Some(1));
    assert_eq!(graph.nodes()[1].attrs["owner"], json!("ci"));
    assert_eq!(graph.edges()[0].source, "build");
}

#[test]
fn malformed_json_is_a_json_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "nodes": [ {{ "title": "no name" }} ] }}"#).unwrap();

    match load_and_validate_graph(file.path()) {
        Err(RowdagError::JsonError(_)) => {}
        other => panic!("Expected JsonError, got: {:?}", other),
    }
}

#[test]
fn missing_graph_file_is_an_io_error() {
    match load_and_validate_graph("does/not/exist.json") {
        Err(RowdagError::IoError(_)) => {}
        other => panic!("Expected IoError, got: {:?}", other),
    }
}
