// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayerdagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Node already exists: {0}")]
    DuplicateNode(String),

    #[error("Node not found: {0}")]
    UnknownNode(String),

    #[error("Edge {from} -> {to} ignored: missing node '{missing}'")]
    MissingEndpoint {
        from: String,
        to: String,
        missing: String,
    },

    #[error("Edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("Graph has no source, cannot assign layers")]
    NoSource,

    #[error("Cycle detected in graph: {0}")]
    Cycle(String),

    #[error("Bad layers for edge {from} -> {to}: {from_layer:?} -> {to_layer:?}")]
    InvalidEdgeSpan {
        from: String,
        to: String,
        from_layer: Option<usize>,
        to_layer: Option<usize>,
    },

    #[error("Layer {layer} is out of range (maximum is {max})")]
    LayerOutOfRange { layer: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, LayerdagError>;
