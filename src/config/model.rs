// src/config/model.rs

use serde::Deserialize;

use crate::graph::model::DEFAULT_DUMMY_PREFIX;
use crate::types::MalformedEdgePolicy;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [output]
/// nodes_per_line = 8
///
/// [dummy]
/// prefix = "_d"
///
/// [reader]
/// on_malformed_edge = "stop"
/// ```
///
/// All sections are optional and have defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub output: OutputSection,

    #[serde(default)]
    pub dummy: DummySection,

    #[serde(default)]
    pub reader: ReaderSection,
}

/// Validated configuration. Build one with `ConfigFile::try_from(raw)` or
/// take the [`Default`].
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub output: OutputSection,
    pub dummy: DummySection,
    pub reader: ReaderSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        output: OutputSection,
        dummy: DummySection,
        reader: ReaderSection,
    ) -> Self {
        Self {
            output,
            dummy,
            reader,
        }
    }
}

/// `[output]` section: layout of written `.ord` files.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    /// Maximum node names per line inside a layer block.
    #[serde(default = "default_nodes_per_line")]
    pub nodes_per_line: usize,
}

fn default_nodes_per_line() -> usize {
    8
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            nodes_per_line: default_nodes_per_line(),
        }
    }
}

/// `[dummy]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DummySection {
    /// Dummy nodes are named `<prefix>_<n>`.
    #[serde(default = "default_dummy_prefix")]
    pub prefix: String,
}

fn default_dummy_prefix() -> String {
    DEFAULT_DUMMY_PREFIX.to_string()
}

impl Default for DummySection {
    fn default() -> Self {
        Self {
            prefix: default_dummy_prefix(),
        }
    }
}

/// `[reader]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReaderSection {
    #[serde(default)]
    pub on_malformed_edge: MalformedEdgePolicy,
}
