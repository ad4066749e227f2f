// src/format/reader.rs

use tracing::info;

use crate::config::ConfigFile;
use crate::errors::Result;
use crate::format::dot::read_dot;
use crate::format::ord::read_ord;
use crate::format::report::ReadReport;
use crate::graph::LayeredGraph;
use crate::graph::model::DEFAULT_DUMMY_PREFIX;
use crate::types::MalformedEdgePolicy;

/// A graph read from text, plus whatever the readers had to work around.
#[derive(Debug, Clone)]
pub struct ParsedGraph {
    pub graph: LayeredGraph,
    pub report: ReadReport,
}

/// Builds a [`LayeredGraph`] from `.dot` and optionally `.ord` text.
#[derive(Debug, Clone)]
pub struct GraphReader {
    policy: MalformedEdgePolicy,
    dummy_prefix: String,
}

impl Default for GraphReader {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphReader {
    pub fn new() -> Self {
        Self {
            policy: MalformedEdgePolicy::default(),
            dummy_prefix: DEFAULT_DUMMY_PREFIX.to_string(),
        }
    }

    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self {
            policy: cfg.reader.on_malformed_edge,
            dummy_prefix: cfg.dummy.prefix.clone(),
        }
    }

    pub fn with_policy(mut self, policy: MalformedEdgePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Read an edge list only. Every node is left without a layer.
    pub fn read_edge_list(&self, dot: &str) -> Result<ParsedGraph> {
        let mut graph = self.empty_graph();
        let report = read_dot(&mut graph, dot, self.policy)?;
        Ok(ParsedGraph { graph, report })
    }

    /// Read a layer order, then an edge list, into one graph.
    ///
    /// The order matters: the `.ord` pass fixes layers and positions, and the
    /// `.dot` pass then adds edges. Nodes named only in the edge list are
    /// created without a layer.
    pub fn read_layered(&self, ord: &str, dot: &str) -> Result<ParsedGraph> {
        let mut graph = self.empty_graph();
        let mut report = read_ord(&mut graph, ord)?;
        report.merge(read_dot(&mut graph, dot, self.policy)?);

        info!(
            graph = %graph.name(),
            nodes = graph.num_nodes(),
            edges = graph.num_edges(),
            layers = graph.num_layers(),
            issues = report.issues.len(),
            "read layered graph"
        );
        Ok(ParsedGraph { graph, report })
    }

    fn empty_graph(&self) -> LayeredGraph {
        LayeredGraph::with_dummy_prefix(self.dummy_prefix.clone())
    }
}
