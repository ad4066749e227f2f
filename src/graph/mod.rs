// src/graph/mod.rs

//! Layered DAG data model.
//!
//! - [`node`] holds the per-node record and its arena handle.
//! - [`layers`] keeps the left-to-right node order of every layer.
//! - [`model`] ties both together behind a name-keyed API.

pub mod layers;
pub mod model;
pub mod node;

pub use layers::{LayerList, MAX_LAYER};
pub use model::LayeredGraph;
pub use node::{Node, NodeId};
