// src/graph/model.rs

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::errors::{LayerdagError, Result};
use crate::graph::layers::LayerList;
use crate::graph::node::{Node, NodeId};
use crate::types::NodeKind;

/// Prefix of synthesised dummy node names (`_d_0`, `_d_1`, ...).
pub const DEFAULT_DUMMY_PREFIX: &str = "_d";

/// A directed graph whose nodes are partitioned into ordered layers.
///
/// Nodes live in an arena and are addressed by [`NodeId`]; externally a node
/// is identified by its name. Iterating over nodes always yields names in
/// lexicographic order, which keeps every serialised output deterministic.
///
/// The graph is lenient about edges: adding an edge between unknown nodes is
/// reported as an error value and leaves the graph untouched, so callers can
/// log it and carry on.
#[derive(Debug, Clone)]
pub struct LayeredGraph {
    name: String,
    comments: Vec<String>,
    nodes: Vec<Node>,
    index: BTreeMap<String, NodeId>,
    layers: LayerList,
    regular_nodes: usize,
    dummy_nodes: usize,
    edges: usize,
    dummy_prefix: String,
    /// Next candidate number for a dummy name.
    next_dummy: usize,
}

impl Default for LayeredGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl LayeredGraph {
    pub fn new() -> Self {
        Self::with_dummy_prefix(DEFAULT_DUMMY_PREFIX)
    }

    /// Empty graph whose dummy nodes are named `<prefix>_<n>`.
    pub fn with_dummy_prefix(prefix: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            comments: Vec::new(),
            nodes: Vec::new(),
            index: BTreeMap::new(),
            layers: LayerList::new(),
            regular_nodes: 0,
            dummy_nodes: 0,
            edges: 0,
            dummy_prefix: prefix.into(),
            next_dummy: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Node behind a handle issued by this graph.
    ///
    /// Panics if `id` was issued by a different graph.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn name_of(&self, id: NodeId) -> &str {
        self.node(id).name()
    }

    /// All node handles, ordered by node name.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.index.values().copied()
    }

    /// All node names in lexicographic order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(|s| s.as_str())
    }

    /// Add a regular node. The name must not be in use yet.
    pub fn add_node(&mut self, name: &str) -> Result<NodeId> {
        if self.contains(name) {
            return Err(LayerdagError::DuplicateNode(name.to_string()));
        }
        let id = self.insert(name.to_string(), NodeKind::Regular);
        self.regular_nodes += 1;
        Ok(id)
    }

    /// Add a dummy node under a fresh name and return its handle.
    ///
    /// Names are `<prefix>_<n>`; numbers already taken by any node (regular
    /// or dummy) are skipped.
    pub fn add_dummy_node(&mut self) -> NodeId {
        let mut name = format!("{}_{}", self.dummy_prefix, self.next_dummy);
        while self.contains(&name) {
            self.next_dummy += 1;
            name = format!("{}_{}", self.dummy_prefix, self.next_dummy);
        }
        self.next_dummy += 1;

        let id = self.insert(name, NodeKind::Dummy);
        self.dummy_nodes += 1;
        id
    }

    fn insert(&mut self, name: String, kind: NodeKind) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        debug!(node = %name, ?kind, "graph: adding node");
        self.index.insert(name.clone(), id);
        self.nodes.push(Node::new(name, kind));
        id
    }

    /// Add the edge `from -> to`.
    ///
    /// If either endpoint does not exist the edge is rejected with
    /// [`LayerdagError::MissingEndpoint`] and nothing is counted.
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<()> {
        let missing = |name: &str| LayerdagError::MissingEndpoint {
            from: from.to_string(),
            to: to.to_string(),
            missing: name.to_string(),
        };
        let from_id = self.node_id(from).ok_or_else(|| missing(from))?;
        let to_id = self.node_id(to).ok_or_else(|| missing(to))?;
        self.add_edge_between(from_id, to_id);
        Ok(())
    }

    pub fn add_edge_between(&mut self, from: NodeId, to: NodeId) {
        self.nodes[from.index()].push_target(to);
        self.edges += 1;
    }

    /// Delete the first edge `from -> to`.
    pub fn delete_edge(&mut self, from: &str, to: &str) -> Result<()> {
        let not_found = || LayerdagError::EdgeNotFound {
            from: from.to_string(),
            to: to.to_string(),
        };
        let from_id = self.node_id(from).ok_or_else(not_found)?;
        let to_id = self.node_id(to).ok_or_else(not_found)?;
        if self.delete_edge_between(from_id, to_id) {
            Ok(())
        } else {
            Err(not_found())
        }
    }

    /// Delete the first edge `from -> to`; `false` if there was none.
    pub fn delete_edge_between(&mut self, from: NodeId, to: NodeId) -> bool {
        let removed = self.nodes[from.index()].remove_target(to);
        if removed {
            self.edges -= 1;
        }
        removed
    }

    /// Move a node to the end of `layer`, taking it off its previous layer.
    ///
    /// Fails with `UnknownNode` or, above [`MAX_LAYER`](crate::graph::MAX_LAYER),
    /// with `LayerOutOfRange`.
    pub fn set_layer(&mut self, name: &str, layer: usize) -> Result<()> {
        let id = self
            .node_id(name)
            .ok_or_else(|| LayerdagError::UnknownNode(name.to_string()))?;
        self.set_node_layer(id, layer)
    }

    /// Handle-based [`set_layer`](Self::set_layer).
    ///
    /// The node is appended to `layer` before it leaves its old one, so a
    /// rejected layer leaves the node where it was.
    pub fn set_node_layer(&mut self, id: NodeId, layer: usize) -> Result<()> {
        self.layers.add(layer, id)?;
        let node = &mut self.nodes[id.index()];
        if let Some(old) = node.layer() {
            // Same layer: drops the old entry, keeping the appended one.
            self.layers.remove(old, id);
        }
        node.set_layer(Some(layer));
        Ok(())
    }

    /// Forget the whole layer partition; every node becomes unassigned.
    pub fn clear_layers(&mut self) {
        for node in self.nodes.iter_mut() {
            node.set_layer(None);
        }
        self.layers.clear();
    }

    /// Targets of a node's outgoing edges, in edge order.
    ///
    /// Unknown names have no neighbours.
    pub fn adjacency(&self, name: &str) -> Vec<&str> {
        self.node_id(name)
            .map(|id| self.targets_of(id))
            .unwrap_or(&[])
            .iter()
            .map(|&t| self.name_of(t))
            .collect()
    }

    pub fn targets_of(&self, id: NodeId) -> &[NodeId] {
        self.node(id).adjacency()
    }

    /// Every edge as `(source, target)`, by source name then edge order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.index.iter().flat_map(move |(name, &id)| {
            self.targets_of(id)
                .iter()
                .map(move |&t| (name.as_str(), self.name_of(t)))
        })
    }

    /// Names on `layer`, left to right. Empty for an out-of-range layer.
    pub fn nodes_on_layer(&self, layer: usize) -> Vec<&str> {
        self.layer_nodes(layer)
            .iter()
            .map(|&id| self.name_of(id))
            .collect()
    }

    pub fn layer_nodes(&self, layer: usize) -> &[NodeId] {
        self.layers.get(layer)
    }

    pub fn layer_size(&self, layer: usize) -> usize {
        self.layers.get(layer).len()
    }

    pub fn layer_of(&self, name: &str) -> Option<usize> {
        self.node_id(name).and_then(|id| self.node(id).layer())
    }

    /// Position of a node within its layer (0 = leftmost).
    pub fn position_in_layer(&self, name: &str) -> Option<usize> {
        let id = self.node_id(name)?;
        let layer = self.node(id).layer()?;
        self.layers.position(layer, id)
    }

    pub fn is_dummy(&self, name: &str) -> bool {
        self.node_id(name)
            .map(|id| self.node(id).is_dummy())
            .unwrap_or(false)
    }

    pub fn num_nodes(&self) -> usize {
        self.regular_nodes + self.dummy_nodes
    }

    pub fn num_regular_nodes(&self) -> usize {
        self.regular_nodes
    }

    pub fn num_dummy_nodes(&self) -> usize {
        self.dummy_nodes
    }

    pub fn num_edges(&self) -> usize {
        self.edges
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }
}

impl fmt::Display for LayeredGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "graph {}: {} layers, {} nodes ({} dummy), {} edges",
            self.name,
            self.num_layers(),
            self.num_nodes(),
            self.num_dummy_nodes(),
            self.num_edges()
        )?;
        for layer in 0..self.num_layers() {
            write!(f, "  layer {layer}:")?;
            for name in self.nodes_on_layer(layer) {
                write!(f, " {name}")?;
            }
            writeln!(f)?;
        }
        for name in self.node_names() {
            write!(f, "    node {name}:")?;
            for target in self.adjacency(name) {
                write!(f, " {target}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
