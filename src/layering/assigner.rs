// src/layering/assigner.rs

use std::collections::VecDeque;
use std::fmt;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::{debug, info, warn};

use crate::errors::{LayerdagError, Result};
use crate::graph::{LayeredGraph, NodeId};
use crate::layering::in_degree::InDegreeTable;

/// Counts reported after a successful layering run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayeringSummary {
    pub regular_nodes: usize,
    pub dummy_nodes: usize,
    pub edges: usize,
    pub layers: usize,
    /// Dummy nodes created by this run.
    pub dummies_inserted: usize,
}

impl LayeringSummary {
    fn of(graph: &LayeredGraph, dummies_inserted: usize) -> Self {
        Self {
            regular_nodes: graph.num_regular_nodes(),
            dummy_nodes: graph.num_dummy_nodes(),
            edges: graph.num_edges(),
            layers: graph.num_layers(),
            dummies_inserted,
        }
    }
}

impl fmt::Display for LayeringSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "original nodes  = {:>8}", self.regular_nodes)?;
        writeln!(f, "dummy nodes     = {:>8}", self.dummy_nodes)?;
        writeln!(f, "edges           = {:>8}", self.edges)?;
        write!(f, "layers          = {:>8}", self.layers)
    }
}

/// Assigns layers to a DAG by topological sort and splits long edges.
///
/// A run has four steps:
/// 1. every node without incoming edges goes to layer 0 and onto a FIFO queue;
/// 2. dequeued nodes release their targets, and a target whose last incoming
///    edge was just released lands one layer below the node that released it;
/// 3. every edge spanning more than one layer is replaced by a chain of dummy
///    nodes, one per skipped layer;
/// 4. summary comments are appended to the graph.
///
/// The result is a longest-path layering: each node sits one layer below its
/// deepest predecessor, which uses the fewest layers possible.
#[derive(Debug)]
pub struct LayerAssigner<'g> {
    graph: &'g mut LayeredGraph,
    in_degree: InDegreeTable,
    queue: VecDeque<NodeId>,
}

impl<'g> LayerAssigner<'g> {
    pub fn new(graph: &'g mut LayeredGraph) -> Self {
        let in_degree = InDegreeTable::from_graph(graph);
        Self {
            graph,
            in_degree,
            queue: VecDeque::new(),
        }
    }

    /// Run all four steps.
    ///
    /// Errors are fatal for the run; the graph is left as far as it got.
    pub fn run(mut self) -> Result<LayeringSummary> {
        self.assign_layers()?;
        let inserted = self.insert_dummy_nodes()?;
        self.add_summary_comments(inserted);

        let summary = LayeringSummary::of(self.graph, inserted);
        info!(
            graph = %self.graph.name(),
            regular = summary.regular_nodes,
            dummy = summary.dummy_nodes,
            edges = summary.edges,
            layers = summary.layers,
            "layer assignment complete"
        );
        Ok(summary)
    }

    /// Steps 1 and 2: compute a layer for every node.
    ///
    /// Any layering already present on the graph is discarded, unless the
    /// graph has no source, in which case it is left untouched.
    pub fn assign_layers(&mut self) -> Result<()> {
        self.init_queue()?;
        while let Some(node) = self.queue.pop_front() {
            self.process_node(node)?;
        }
        self.ensure_all_layered()
    }

    fn init_queue(&mut self) -> Result<()> {
        let sources: Vec<NodeId> = self.in_degree.sources(self.graph).collect();
        if sources.is_empty() {
            return Err(LayerdagError::NoSource);
        }

        self.graph.clear_layers();
        self.queue.clear();
        for id in sources {
            debug!(node = %self.graph.name_of(id), "source placed on layer 0");
            self.graph.set_node_layer(id, 0)?;
            self.queue.push_back(id);
        }
        Ok(())
    }

    fn process_node(&mut self, node: NodeId) -> Result<()> {
        let Some(layer) = self.graph.node(node).layer() else {
            warn!(node = %self.graph.name_of(node), "dequeued node has no layer; skipping");
            return Ok(());
        };

        let targets = self.graph.targets_of(node).to_vec();
        for target in targets {
            if self.graph.node(target).layer().is_some() {
                warn!(
                    from = %self.graph.name_of(node),
                    to = %self.graph.name_of(target),
                    "target already has a layer when processing edge"
                );
            }
            if self.in_degree.dec(target) == 0 {
                self.graph.set_node_layer(target, layer + 1)?;
                self.queue.push_back(target);
            }
        }
        Ok(())
    }

    /// Nodes never reached from a source lie on or behind a cycle.
    fn ensure_all_layered(&self) -> Result<()> {
        let unlayered: Vec<NodeId> = self
            .graph
            .node_ids()
            .filter(|&id| self.graph.node(id).layer().is_none())
            .collect();
        if unlayered.is_empty() {
            return Ok(());
        }

        let mut remaining: DiGraphMap<&str, ()> = DiGraphMap::new();
        for &id in &unlayered {
            remaining.add_node(self.graph.name_of(id));
        }
        for &id in &unlayered {
            for &target in self.graph.targets_of(id) {
                if self.graph.node(target).layer().is_none() {
                    remaining.add_edge(self.graph.name_of(id), self.graph.name_of(target), ());
                }
            }
        }

        let culprit = match toposort(&remaining, None) {
            Err(cycle) => cycle.node_id().to_string(),
            Ok(order) => order.first().map(|s| s.to_string()).unwrap_or_default(),
        };
        Err(LayerdagError::Cycle(format!(
            "{} node(s) unreachable from any source; cycle involving node '{}'",
            unlayered.len(),
            culprit
        )))
    }

    /// Step 3: replace every edge that skips layers by a chain of dummy nodes.
    ///
    /// Works on a snapshot of the nodes present when it starts; dummies added
    /// along the way are not rescanned. Returns the number of dummies added.
    pub fn insert_dummy_nodes(&mut self) -> Result<usize> {
        let nodes: Vec<NodeId> = self.graph.node_ids().collect();
        let mut inserted = 0;

        for source in nodes {
            let targets = self.graph.targets_of(source).to_vec();
            for target in targets {
                let from_layer = self.graph.node(source).layer();
                let to_layer = self.graph.node(target).layer();
                match (from_layer, to_layer) {
                    (Some(from), Some(to)) if from < to => {
                        if to - from > 1 {
                            inserted += self.insert_chain(source, target, from, to)?;
                        }
                    }
                    _ => {
                        return Err(LayerdagError::InvalidEdgeSpan {
                            from: self.graph.name_of(source).to_string(),
                            to: self.graph.name_of(target).to_string(),
                            from_layer,
                            to_layer,
                        });
                    }
                }
            }
        }

        debug!(inserted, "dummy node insertion finished");
        Ok(inserted)
    }

    /// Replace `source -> target` by `source -> d.. -> target`, one dummy on
    /// every layer strictly between `from` and `to`.
    fn insert_chain(
        &mut self,
        source: NodeId,
        target: NodeId,
        from: usize,
        to: usize,
    ) -> Result<usize> {
        let mut previous = source;
        for layer in (from + 1)..to {
            let dummy = self.graph.add_dummy_node();
            self.graph.set_node_layer(dummy, layer)?;
            self.graph.add_edge_between(previous, dummy);
            debug!(
                from = %self.graph.name_of(previous),
                to = %self.graph.name_of(dummy),
                layer,
                "added edge to dummy node"
            );
            previous = dummy;
        }
        self.graph.add_edge_between(previous, target);
        self.graph.delete_edge_between(source, target);
        Ok(to - from - 1)
    }

    /// Step 4: record what the run did in the graph's comments.
    pub fn add_summary_comments(&mut self, inserted: usize) {
        self.graph.add_comment(format!(
            "Layer assignment done: {inserted} dummy nodes added."
        ));
        self.graph.add_comment(format!(
            "total nodes = {}, edges = {}, layers = {}",
            self.graph.num_nodes(),
            self.graph.num_edges(),
            self.graph.num_layers()
        ));
    }
}
