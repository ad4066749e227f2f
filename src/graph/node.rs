// src/graph/node.rs

use crate::types::NodeKind;

/// Stable handle of a node inside a [`LayeredGraph`](super::LayeredGraph).
///
/// Handles are dense indices into the node arena; nodes are never removed,
/// so a handle stays valid for the lifetime of the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A node of the layered graph.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    kind: NodeKind,
    /// `None` until the node is placed on a layer.
    layer: Option<usize>,
    /// Targets of outgoing edges, in declaration order. Duplicates allowed.
    adjacency: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(name: String, kind: NodeKind) -> Self {
        Self {
            name,
            kind,
            layer: None,
            adjacency: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_dummy(&self) -> bool {
        self.kind == NodeKind::Dummy
    }

    pub fn layer(&self) -> Option<usize> {
        self.layer
    }

    pub fn adjacency(&self) -> &[NodeId] {
        &self.adjacency
    }

    pub(crate) fn set_layer(&mut self, layer: Option<usize>) {
        self.layer = layer;
    }

    pub(crate) fn push_target(&mut self, target: NodeId) {
        self.adjacency.push(target);
    }

    /// Remove the first edge to `target`; `false` if there was none.
    pub(crate) fn remove_target(&mut self, target: NodeId) -> bool {
        match self.adjacency.iter().position(|&t| t == target) {
            Some(idx) => {
                self.adjacency.remove(idx);
                true
            }
            None => false,
        }
    }
}
