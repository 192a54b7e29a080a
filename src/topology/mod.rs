//! Player topology module.
//!
//! This module contains the topologies players can be arranged on and
//! generates the connections between them.

pub mod types;
pub mod connections;

// Re-export key types for easier access
pub use types::{TopologyError, TopologyKind};
pub use connections::{Lattice, Topology};
