//! End-to-end tests: edge-list files on disk through to PageRank scores.

use std::io::Write;

use rapid_pagerank::{Error, GraphStore, ImportConfig, PageRank, RankConfig, SinkPolicy};
use tempfile::NamedTempFile;

fn edge_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn two_vertex_cycle_from_file() {
    let file = edge_file("A|B|1\nB|A|1\n");
    let mut pr = PageRank::new();
    pr.import_data(file.path()).unwrap();

    let t = pr.construct_transition_matrix().unwrap();
    assert_eq!(t.as_slice(), &[0.0, 1.0, 1.0, 0.0]);

    let ranks = pr.calculate_page_rank(7).unwrap();
    assert_eq!(ranks.len(), 2);
    assert!((ranks["A"] - 0.5).abs() < 1e-12);
    assert!((ranks["B"] - 0.5).abs() < 1e-12);
}

#[test]
fn three_cycle_converges() {
    let file = edge_file("A|B|1\nB|C|1\nC|A|1\n");
    let mut pr = PageRank::new();
    pr.import_data(file.path()).unwrap();

    let ranks = pr.calculate_page_rank(50).unwrap();
    for v in ["A", "B", "C"] {
        assert!((ranks[v] - 1.0 / 3.0).abs() < 1e-9, "{v}: {}", ranks[v]);
    }
}

#[test]
fn weighted_graph_prefers_heavy_targets() {
    let file = edge_file("home|docs|9\nhome|blog|1\ndocs|home|1\nblog|home|1\ndocs|blog|1\n");
    let mut pr = PageRank::new();
    pr.import_data(file.path()).unwrap();

    let result = pr.rank_with_iterations(100).unwrap();
    assert!(result.score("docs").unwrap() > result.score("blog").unwrap());
    assert!((result.total_mass() - 1.0).abs() < 1e-9);
}

#[test]
fn malformed_line_fails_import() {
    let file = edge_file("A|B|1\nA|B\n");
    let mut pr = PageRank::new();

    let err = pr.import_data(file.path()).unwrap_err();
    assert!(matches!(err, Error::Format { line: 2, .. }));
}

#[test]
fn failed_import_keeps_previous_graph() {
    let good = edge_file("A|B|1\nB|A|1\n");
    let bad = edge_file("C|D|one\n");
    let mut pr = PageRank::new();

    pr.import_data(good.path()).unwrap();
    assert!(pr.import_data(bad.path()).is_err());
    assert_eq!(pr.graph().vertices(), &["A", "B"]);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut pr = PageRank::new();

    let err = pr.import_data(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn import_is_reproducible() {
    let file = edge_file("x|y|3\ny|z|1\nz|x|2\nx|z|5\nx|y|4\n");

    let first = GraphStore::from_path(file.path(), &ImportConfig::strict()).unwrap();
    let second = GraphStore::from_path(file.path(), &ImportConfig::strict()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.vertices(), &["x", "y", "z"]);
    assert_eq!(first.weight("x", "y"), 4);
}

#[test]
fn lenient_import_from_config_file() {
    let config = edge_file(r#"{"iterations": 12, "import": {"skip_blank_lines": true, "trim_fields": true}}"#);
    let edges = edge_file("A | B | 1\r\n\r\nB | A | 1\r\n");

    let cfg = RankConfig::from_path(config.path()).unwrap();
    let mut pr = PageRank::new().with_config(cfg);
    pr.import_data(edges.path()).unwrap();

    let result = pr.rank().unwrap();
    assert_eq!(result.iterations, 12);
    assert_eq!(result.score("A"), Some(0.5));
}

#[test]
fn sink_is_redistributed_uniformly_by_default() {
    let file = edge_file("A|B|1\nA|C|1\nB|C|1\n");
    let mut pr = PageRank::new();
    pr.import_data(file.path()).unwrap();

    let result = pr.rank_with_iterations(40).unwrap();
    assert!((result.total_mass() - 1.0).abs() < 1e-9);
    assert!(result.scores.iter().all(|s| s.is_finite()));
    assert_eq!(result.top_n(1)[0].0, "C");
}

#[test]
fn sink_can_be_rejected() {
    let file = edge_file("A|B|1\n");
    let mut pr = PageRank::new().with_config(RankConfig::new().with_sink_policy(SinkPolicy::Reject));
    pr.import_data(file.path()).unwrap();

    let err = pr.calculate_page_rank(1).unwrap_err();
    assert!(matches!(err, Error::RankSink { vertex } if vertex == "B"));
}
