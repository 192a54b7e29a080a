//! Graph model handed to the serializer.
//!
//! Field names are part of the output contract: nodes carry `id` plus the six
//! state attributes in camelCase, edges carry `id`, `source` and `target`.

use serde::{Deserialize, Serialize};

use crate::config::PlayerState;

/// A player node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub pre_action: String,
    pub action: String,
    pub pre_score: f64,
    pub score: f64,
    pub pre_strategy: String,
    pub strategy: String,
}

impl GraphNode {
    pub fn new(id: String, state: &PlayerState) -> Self {
        Self {
            id,
            pre_action: state.pre_action.clone(),
            action: state.action.clone(),
            pre_score: state.pre_score,
            score: state.score,
            pre_strategy: state.pre_strategy.clone(),
            strategy: state.strategy.clone(),
        }
    }
}

/// An undirected connection between two players
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Sequential from 0
    pub id: usize,
    pub source: String,
    pub target: String,
}

/// The assembled graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphModel {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphModel {
    /// Number of edges touching the node with the given id
    pub fn degree(&self, id: &str) -> usize {
        self.edges
            .iter()
            .map(|edge| usize::from(edge.source == id) + usize::from(edge.target == id))
            .sum()
    }
}
