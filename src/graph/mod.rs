//! Graph model module.
//!
//! Node and edge types making up the generated data set, and the identifier
//! formatting shared by both.

pub mod id;
pub mod types;

pub use id::IdFormatter;
pub use types::{GraphEdge, GraphModel, GraphNode};
