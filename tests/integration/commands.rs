// tests/integration/commands.rs

use std::path::{Path, PathBuf};

use layerdag::commands::{assign, output_paths, show};
use layerdag::config::ConfigFile;
use layerdag::errors::LayerdagError;
use layerdag::format::ReadIssue;
use layerdag::fs::mock::MockFileSystem;
use layerdag::fs::{FileSystem, RealFileSystem};
use layerdag::types::MalformedEdgePolicy;
use layerdag_test_utils::builders::ConfigFileBuilder;
use layerdag_test_utils::init_tracing;

const TRIANGLE: &str = "/*\n * a small example\n */\ndigraph Tri {\n a -> b;\n b -> c;\n a -> c;\n}\n";

#[test]
fn test_assign_writes_dot_and_ord() {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_file("in.dot", TRIANGLE);

    let summary = assign(&fs, Path::new("in.dot"), "out", &ConfigFile::default()).unwrap();
    assert_eq!(summary.regular_nodes, 3);
    assert_eq!(summary.dummy_nodes, 1);
    assert_eq!(summary.edges, 4);
    assert_eq!(summary.layers, 3);

    let dot = fs.contents("out.dot").unwrap();
    assert_eq!(
        dot,
        "/*\n * a small example\n * Layer assignment done: 1 dummy nodes added.\n \
         * total nodes = 4, edges = 4, layers = 3\n */\ndigraph Tri {\n _d_0 -> c;\n \
         a -> b;\n a -> _d_0;\n b -> c;\n}\n"
    );

    let ord = fs.contents("out.ord").unwrap();
    assert!(ord.starts_with("# layerdag assign for out.dot\n# Graph name = Tri\n"));
    assert!(ord.contains("1 {\n b _d_0\n} # end of layer 1\n"));
}

#[test]
fn test_show_reads_back_what_assign_wrote() {
    let fs = MockFileSystem::new();
    fs.add_file("in.dot", TRIANGLE);
    let cfg = ConfigFile::default();
    assign(&fs, Path::new("in.dot"), "out", &cfg).unwrap();

    let parsed = show(&fs, "out", true, &cfg).unwrap();
    let graph = &parsed.graph;

    assert!(parsed.report.is_clean());
    assert_eq!(graph.name(), "Tri");
    assert_eq!(graph.num_layers(), 3);
    assert_eq!(graph.nodes_on_layer(1), vec!["b", "_d_0"]);
    assert_eq!(graph.num_edges(), 4);
}

#[test]
fn test_show_without_ord_leaves_nodes_unlayered() {
    let fs = MockFileSystem::new();
    fs.add_file("g.dot", TRIANGLE);
    let cfg = ConfigFile::default();

    // No g.ord on disk: falls back to edges only.
    let parsed = show(&fs, "g", true, &cfg).unwrap();
    assert_eq!(parsed.graph.num_layers(), 0);
    assert_eq!(parsed.graph.num_edges(), 3);

    fs.add_file("g.ord", "0 { a }\n");
    let parsed = show(&fs, "g", false, &cfg).unwrap();
    assert_eq!(parsed.graph.layer_of("a"), None);
}

#[test]
fn test_assign_on_cyclic_graph_writes_nothing() {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_file("cyc.dot", "digraph C {\n a -> b;\n b -> a;\n}\n");

    let err = assign(&fs, Path::new("cyc.dot"), "out", &ConfigFile::default()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LayerdagError>(),
        Some(LayerdagError::NoSource)
    ));
    assert_eq!(fs.paths(), vec![PathBuf::from("cyc.dot")]);
}

#[test]
fn test_assign_on_cycle_behind_source_writes_nothing() {
    let fs = MockFileSystem::new();
    fs.add_file("cyc.dot", "digraph C {\n s -> a;\n a -> b;\n b -> a;\n}\n");

    let err = assign(&fs, Path::new("cyc.dot"), "out", &ConfigFile::default()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LayerdagError>(),
        Some(LayerdagError::Cycle(_))
    ));
    assert!(fs.contents("out.dot").is_none());
    assert!(fs.contents("out.ord").is_none());
}

#[test]
fn test_assign_removes_dot_when_ord_cannot_be_written() {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_file("in.dot", TRIANGLE);
    fs.deny_writes("out.ord");

    let err = assign(&fs, Path::new("in.dot"), "out", &ConfigFile::default()).unwrap_err();
    assert!(err.to_string().contains("permission denied"));
    assert_eq!(fs.paths(), vec![PathBuf::from("in.dot")]);
}

#[test]
fn test_mock_remove_file() {
    let fs = MockFileSystem::new();
    fs.add_file("a.dot", "x");

    fs.remove_file(Path::new("a.dot")).unwrap();
    assert!(!fs.exists(Path::new("a.dot")));
    assert!(fs.remove_file(Path::new("a.dot")).is_err());
}

#[test]
fn test_assign_missing_input_fails() {
    let fs = MockFileSystem::new();
    let err = assign(&fs, Path::new("nope.dot"), "out", &ConfigFile::default()).unwrap_err();
    assert!(err.to_string().contains("not found"));
    assert!(fs.paths().is_empty());
}

#[test]
fn test_assign_honours_config() {
    let fs = MockFileSystem::new();
    fs.add_file(
        "in.dot",
        "digraph W {\n a -> b;\n a -> c;\n a -> d;\n b => x;\n b -> e;\n e -> d;\n}\n",
    );
    let cfg = ConfigFileBuilder::new()
        .nodes_per_line(2)
        .dummy_prefix("pad")
        .on_malformed_edge(MalformedEdgePolicy::Skip)
        .build();

    let summary = assign(&fs, Path::new("in.dot"), "w", &cfg).unwrap();
    // b => x is dropped, the statements after it are kept.
    assert_eq!(summary.regular_nodes, 5);
    assert_eq!(summary.dummies_inserted, 2);

    let ord = fs.contents("w.ord").unwrap();
    assert!(ord.contains("1 {\n b c\n pad_0\n} # end of layer 1\n"));
    assert!(ord.contains("2 {\n e pad_1\n} # end of layer 2\n"));
}

#[test]
fn test_show_reports_recoverable_issues() {
    let fs = MockFileSystem::new();
    fs.add_file("bad.dot", "digraph B {\n a -> b;\n");

    let parsed = show(&fs, "bad", true, &ConfigFile::default()).unwrap();
    assert_eq!(parsed.report.issues, vec![ReadIssue::MissingCloseBrace]);
    assert_eq!(parsed.graph.num_edges(), 1);
}

#[test]
fn test_real_filesystem_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.dot");
    std::fs::write(&input, TRIANGLE).unwrap();

    let base = dir.path().join("nested").join("tri");
    let base = base.to_str().unwrap();
    let fs = RealFileSystem;
    let cfg = ConfigFile::default();

    assign(&fs, &input, base, &cfg).unwrap();

    let (dot_path, ord_path) = output_paths(base);
    assert!(fs.exists(&dot_path));
    assert!(fs.exists(&ord_path));

    let parsed = show(&fs, base, true, &cfg).unwrap();
    assert_eq!(parsed.graph.num_nodes(), 4);
    assert_eq!(parsed.graph.layer_of("c"), Some(2));
}

#[test]
fn test_demo_graph_assigns_cleanly() {
    let demo = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/diamond.dot");
    let text = std::fs::read_to_string(&demo).unwrap();

    let fs = MockFileSystem::new();
    fs.add_file("diamond.dot", text);

    let summary = assign(&fs, Path::new("diamond.dot"), "diamond", &ConfigFile::default()).unwrap();
    assert_eq!(summary.layers, 4);
    assert_eq!(summary.regular_nodes, 6);
    assert_eq!(summary.dummies_inserted, 2);
}
