#![allow(dead_code)]

use layerdag::config::{ConfigFile, RawConfigFile};
use layerdag::graph::LayeredGraph;
use layerdag::types::MalformedEdgePolicy;

/// Builder for `LayeredGraph` to simplify test setup.
///
/// Nodes named by an edge are created on first use, in the order they are
/// mentioned, the same way the edge-list reader creates them.
pub struct GraphBuilder {
    graph: LayeredGraph,
}

impl GraphBuilder {
    pub fn new(name: &str) -> Self {
        let mut graph = LayeredGraph::new();
        graph.set_name(name);
        Self { graph }
    }

    pub fn node(mut self, name: &str) -> Self {
        if !self.graph.contains(name) {
            self.graph
                .add_node(name)
                .expect("node was checked to be absent");
        }
        self
    }

    pub fn edge(self, from: &str, to: &str) -> Self {
        let mut this = self.node(from).node(to);
        this.graph
            .add_edge(from, to)
            .expect("both endpoints were just created");
        this
    }

    /// Add every edge of a `"a->b b->c"` list.
    pub fn edges(self, list: &str) -> Self {
        crate::parse_edge_pairs(list)
            .iter()
            .fold(self, |builder, (from, to)| builder.edge(from, to))
    }

    /// Put `name` on `layer`, creating it if needed.
    pub fn on_layer(self, name: &str, layer: usize) -> Self {
        let mut this = self.node(name);
        this.graph
            .set_layer(name, layer)
            .expect("node was just ensured");
        this
    }

    pub fn build(self) -> LayeredGraph {
        self.graph
    }
}

/// Builder for `ConfigFile`.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn nodes_per_line(mut self, n: usize) -> Self {
        self.config.output.nodes_per_line = n;
        self
    }

    pub fn dummy_prefix(mut self, prefix: &str) -> Self {
        self.config.dummy.prefix = prefix.to_string();
        self
    }

    pub fn on_malformed_edge(mut self, policy: MalformedEdgePolicy) -> Self {
        self.config.reader.on_malformed_edge = policy;
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
