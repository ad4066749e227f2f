// tests/integration/error_handling.rs

use std::io::Write;
use tempfile::NamedTempFile;
use layerdag::config::{load_and_validate, load_or_default};
use layerdag::errors::LayerdagError;
use layerdag::types::MalformedEdgePolicy;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn test_valid_config_is_loaded() {
    let file = config_file(
        r#"
[output]
nodes_per_line = 3

[dummy]
prefix = "pad"

[reader]
on_malformed_edge = "skip"
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.output.nodes_per_line, 3);
    assert_eq!(cfg.dummy.prefix, "pad");
    assert_eq!(cfg.reader.on_malformed_edge, MalformedEdgePolicy::Skip);
}

#[test]
fn test_empty_config_uses_defaults() {
    let file = config_file("");

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.output.nodes_per_line, 8);
    assert_eq!(cfg.dummy.prefix, "_d");
    assert_eq!(cfg.reader.on_malformed_edge, MalformedEdgePolicy::Stop);
}

#[test]
fn test_zero_nodes_per_line_returns_config_error() {
    let file = config_file("[output]\nnodes_per_line = 0\n");

    match load_and_validate(file.path()) {
        Err(LayerdagError::ConfigError(msg)) => {
            assert!(msg.contains("nodes_per_line"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_dummy_prefix_with_reserved_character_returns_config_error() {
    for prefix in ["", "a b", "d#", "{x", "y;"] {
        let file = config_file(&format!("[dummy]\nprefix = \"{}\"\n", prefix));

        match load_and_validate(file.path()) {
            Err(LayerdagError::ConfigError(msg)) => {
                assert!(msg.contains("prefix"), "message was: {}", msg);
            }
            Err(e) => panic!("Expected ConfigError for {:?}, got: {:?}", prefix, e),
            Ok(_) => panic!("Expected error for {:?}, got Ok", prefix),
        }
    }
}

#[test]
fn test_unknown_policy_returns_toml_error() {
    let file = config_file("[reader]\non_malformed_edge = \"ignore\"\n");

    let result = load_and_validate(file.path());
    assert!(matches!(result, Err(LayerdagError::TomlError(_))));
}

#[test]
fn test_invalid_toml_returns_toml_error() {
    let file = config_file("[output\nnodes_per_line = ");

    let result = load_and_validate(file.path());
    assert!(matches!(result, Err(LayerdagError::TomlError(_))));
}

#[test]
fn test_missing_explicit_config_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let result = load_or_default(Some(&missing));
    assert!(matches!(result, Err(LayerdagError::IoError(_))));
}

#[test]
fn test_error_messages_name_the_problem() {
    let err = LayerdagError::InvalidEdgeSpan {
        from: "a".to_string(),
        to: "b".to_string(),
        from_layer: Some(2),
        to_layer: Some(1),
    };
    assert_eq!(err.to_string(), "Bad layers for edge a -> b: Some(2) -> Some(1)");
    assert_eq!(
        LayerdagError::NoSource.to_string(),
        "Graph has no source, cannot assign layers"
    );
}
