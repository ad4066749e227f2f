// src/layering/in_degree.rs

use crate::graph::{LayeredGraph, NodeId};

/// Scratch in-degree counters for one layering run.
///
/// Built fresh from the graph's edges; the counts drop as predecessors are
/// processed, so they only mean "unprocessed incoming edges" mid-run.
#[derive(Debug, Clone)]
pub struct InDegreeTable {
    counts: Vec<usize>,
}

impl InDegreeTable {
    /// Count incoming edges of every node in `graph`.
    pub fn from_graph(graph: &LayeredGraph) -> Self {
        let mut table = Self {
            counts: vec![0; graph.num_nodes()],
        };
        for id in graph.node_ids() {
            for &target in graph.targets_of(id) {
                table.inc(target);
            }
        }
        table
    }

    pub fn get(&self, id: NodeId) -> usize {
        self.counts.get(id.index()).copied().unwrap_or(0)
    }

    pub fn inc(&mut self, id: NodeId) {
        if id.index() >= self.counts.len() {
            self.counts.resize(id.index() + 1, 0);
        }
        if let Some(count) = self.counts.get_mut(id.index()) {
            *count += 1;
        }
    }

    /// Decrement and return the remaining count (never below zero).
    pub fn dec(&mut self, id: NodeId) -> usize {
        match self.counts.get_mut(id.index()) {
            Some(count) => {
                *count = count.saturating_sub(1);
                *count
            }
            None => 0,
        }
    }

    pub fn clear(&mut self, id: NodeId) {
        if let Some(count) = self.counts.get_mut(id.index()) {
            *count = 0;
        }
    }

    /// Nodes without incoming edges, ordered by name.
    pub fn sources<'a>(&'a self, graph: &'a LayeredGraph) -> impl Iterator<Item = NodeId> + 'a {
        graph.node_ids().filter(move |&id| self.get(id) == 0)
    }
}
