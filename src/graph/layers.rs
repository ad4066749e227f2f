// src/graph/layers.rs

use crate::errors::{LayerdagError, Result};
use crate::graph::node::NodeId;

/// Highest layer index a graph accepts.
pub const MAX_LAYER: usize = 1 << 20;

/// Dense list of layers, each an ordered (left to right) list of nodes.
///
/// Every index below [`len`](Self::len) is a valid layer, possibly empty.
/// Adding a node beyond the current maximum creates all missing layers.
#[derive(Debug, Clone, Default)]
pub struct LayerList {
    layers: Vec<Vec<NodeId>>,
}

impl LayerList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `node` to the end of `layer`, growing the list as needed.
    ///
    /// Layers above [`MAX_LAYER`] are rejected and leave the list unchanged.
    pub fn add(&mut self, layer: usize, node: NodeId) -> Result<()> {
        let wanted = layer
            .checked_add(1)
            .filter(|_| layer <= MAX_LAYER)
            .ok_or(LayerdagError::LayerOutOfRange {
                layer,
                max: MAX_LAYER,
            })?;
        if wanted > self.layers.len() {
            self.layers.resize_with(wanted, Vec::new);
        }
        if let Some(nodes) = self.layers.get_mut(layer) {
            nodes.push(node);
        }
        Ok(())
    }

    /// Remove `node` from `layer`; returns whether it was there.
    pub fn remove(&mut self, layer: usize, node: NodeId) -> bool {
        let Some(nodes) = self.layers.get_mut(layer) else {
            return false;
        };
        match nodes.iter().position(|&n| n == node) {
            Some(idx) => {
                nodes.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Position of `node` on `layer`, if present.
    pub fn position(&self, layer: usize, node: NodeId) -> Option<usize> {
        self.get(layer).iter().position(|&n| n == node)
    }

    /// Nodes of `layer` in order; empty for an out-of-range layer.
    pub fn get(&self, layer: usize) -> &[NodeId] {
        self.layers
            .get(layer)
            .map(|nodes| nodes.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn clear(&mut self) {
        self.layers.clear();
    }
}
