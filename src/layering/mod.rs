// src/layering/mod.rs

//! Layer assignment and edge normalisation.
//!
//! - [`in_degree`] holds the per-run scratch counters.
//! - [`assigner`] runs the topological layering and dummy insertion.

pub mod assigner;
pub mod in_degree;

pub use assigner::{LayerAssigner, LayeringSummary};
pub use in_degree::InDegreeTable;

use crate::errors::Result;
use crate::graph::LayeredGraph;

/// Assign layers to `graph` and split every multi-layer edge.
pub fn assign_layers(graph: &mut LayeredGraph) -> Result<LayeringSummary> {
    LayerAssigner::new(graph).run()
}
