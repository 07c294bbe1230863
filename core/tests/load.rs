use std::io::Write;

use neuronet_core::{GraphError, GraphQuery, LoadOptions, SparseGraph};
use tempfile::NamedTempFile;

fn edge_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn sample_graph() -> (SparseGraph, NamedTempFile) {
    let file = edge_file("0 1\n1 2\n0 2\n# comment\n\n3 0");
    let mut g = SparseGraph::new();
    g.load(file.path()).unwrap();
    (g, file)
}

#[test]
fn test_sample_counts_and_degrees() {
    let (g, file) = sample_graph();
    assert_eq!(g.source(), Some(file.path()));
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 4);
    assert_eq!(g.degree(0), 2);
    assert_eq!(g.degree(1), 1);
    assert_eq!(g.degree(2), 0);
    assert_eq!(g.degree(3), 1);
}

#[test]
fn test_sample_bfs_depth_one() {
    let (g, _file) = sample_graph();
    let visited = g.bfs(0, 1).unwrap();
    assert_eq!(visited.len(), 3);
    assert_eq!(visited[0], 0);
    assert!(visited[1..].contains(&1));
    assert!(visited[1..].contains(&2));
}

#[test]
fn test_sample_bfs_from_sink() {
    let (g, _file) = sample_graph();
    assert_eq!(g.bfs(2, 5).unwrap(), vec![2]);
}

#[test]
fn test_sample_max_degree() {
    let (g, _file) = sample_graph();
    assert_eq!(g.max_degree_node(), Some(0));
}

#[test]
fn test_sample_out_of_range_queries() {
    let (g, _file) = sample_graph();
    assert_eq!(g.degree(4), 0);
    assert!(g.neighbors(4).is_empty());
    assert!(g.neighbors(2).is_empty());
    assert!(matches!(
        g.bfs(4, 1),
        Err(GraphError::StartOutOfRange {
            start: 4,
            node_count: 4
        })
    ));
}

#[test]
fn test_report_matches_graph() {
    let file = edge_file("0 1\n1 2\n0 2\n# comment\n\n3 0");
    let mut g = SparseGraph::new();
    let report = g.load(file.path()).unwrap();
    assert_eq!(report.node_count, 4);
    assert_eq!(report.edge_count, 4);
    assert_eq!(report.memory_bytes, g.memory_usage());
    assert!(report.memory_mb() > 0.0);
}

#[test]
fn test_missing_file_is_never_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let mut g = SparseGraph::new();
    let err = g.load(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, GraphError::Io { .. }));
    assert!(!g.is_loaded());
    assert!(g.bfs(0, 0).is_err());
}

#[test]
fn test_retry_after_failure() {
    let dir = tempfile::tempdir().unwrap();
    let mut g = SparseGraph::new();
    assert!(g.load(dir.path().join("missing.txt")).is_err());

    let file = edge_file("1 0\n");
    g.load(file.path()).unwrap();
    assert!(g.is_loaded());
    assert_eq!(g.max_degree_node(), Some(1));
}

#[test]
fn test_lenient_lines() {
    // "5" has no destination, "  # x" is not a comment (first byte is a space).
    let file = edge_file("5\n  # x\n2\t\t3 trailing\n");
    let mut g = SparseGraph::new();
    g.load(file.path()).unwrap();
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.node_count(), 6);
    assert_eq!(g.neighbors(5), vec![0]);
    assert_eq!(g.neighbors(0), vec![0]);
    assert_eq!(g.neighbors(2), vec![3]);
}

#[test]
fn test_empty_file_has_single_node() {
    let file = edge_file("# only a header\n\n");
    let mut g = SparseGraph::new();
    let report = g.load(file.path()).unwrap();
    assert_eq!(report.node_count, 1);
    assert_eq!(report.edge_count, 0);
    assert_eq!(g.node_count(), 1);
    assert_eq!(g.degree(0), 0);
    assert_eq!(g.bfs(0, 0).unwrap(), vec![0]);
    assert_eq!(g.bfs(0, 5).unwrap(), vec![0]);
    assert!(g.bfs(1, 0).is_err());
    assert_eq!(g.max_degree_node(), None);
}

#[test]
fn test_crlf_blank_line_is_an_edge() {
    let file = edge_file("1 2\r\n\r\n");
    let mut g = SparseGraph::new();
    g.load(file.path()).unwrap();
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.degree(0), 1);
    assert_eq!(g.neighbors(0), vec![0]);
    assert_eq!(g.neighbors(1), vec![2]);
}

#[test]
fn test_memory_limit_from_file() {
    let file = edge_file("0 50000000\n");
    let mut g = SparseGraph::with_options(LoadOptions {
        max_memory_mb: Some(16),
    });
    let err = g.load(file.path()).unwrap_err();
    match err {
        GraphError::MemoryLimit {
            required_mb,
            limit_mb,
        } => {
            assert_eq!(limit_mb, 16);
            assert!(required_mb > 16);
        }
        other => panic!("expected MemoryLimit, got {other:?}"),
    }
    assert!(!g.is_loaded());
}
