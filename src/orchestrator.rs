//! Graph build orchestrator.
//!
//! This module coordinates the overall build, from settings resolution
//! through node and edge assembly. The build is a single pass: it either
//! returns a complete graph or stops at the first blocking condition without
//! exposing a partial one.

use log::{debug, info};

use crate::config::{Config, PlayerState, SettingEntry};
use crate::diagnostics::Diagnostics;
use crate::graph::{GraphEdge, GraphModel, GraphNode, IdFormatter};
use crate::settings::{default_assignment, resolve_settings, AssignmentTable};
use crate::topology::{Topology, TopologyError};

/// Everything a build needs, borrowed from the caller
#[derive(Debug, Clone, Copy)]
pub struct BuildInput<'a> {
    pub player_count: usize,
    pub topology: &'a str,
    pub settings_enabled: bool,
    /// Consulted only when `settings_enabled` is set
    pub settings: &'a [SettingEntry],
    pub default_state: &'a PlayerState,
}

impl<'a> From<&'a Config> for BuildInput<'a> {
    fn from(config: &'a Config) -> Self {
        Self {
            player_count: config.player_count(),
            topology: &config.environment.topology,
            settings_enabled: config.players.settings_enabled,
            settings: &config.players.settings,
            default_state: &config.players.default,
        }
    }
}

/// A successful build
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub model: GraphModel,
    /// Non-blocking messages collected on the way
    pub diagnostics: Diagnostics,
}

/// Reasons a build produces no graph
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Player count must be at least 1")]
    NoPlayers,

    #[error("Player settings have {} blocking alert(s), graph not assembled", .diagnostics.blocking_count())]
    Blocked { diagnostics: Diagnostics },

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Build the graph for `input`
///
/// # Returns
/// * `Ok(BuildReport)` with the graph and any informational diagnostics
/// * `Err(BuildError::Blocked)` carrying all diagnostics if a setting selects
///   no players
/// * `Err(BuildError::Topology)` if the topology is unknown or does not fit
///   the player count
pub fn build_graph(input: &BuildInput<'_>) -> Result<BuildReport, BuildError> {
    if input.player_count == 0 {
        return Err(BuildError::NoPlayers);
    }

    info!(
        "Building {} topology graph for {} players",
        input.topology, input.player_count
    );

    let mut diagnostics = Diagnostics::new();
    let assignments = if input.settings_enabled {
        resolve_settings(
            input.player_count,
            input.settings,
            input.default_state,
            &mut diagnostics,
        )
    } else {
        default_assignment(input.player_count, input.default_state)
    };

    if diagnostics.is_blocked() {
        return Err(BuildError::Blocked { diagnostics });
    }

    let ids = IdFormatter::new(input.player_count);
    let nodes = assemble_nodes(&assignments, &ids);

    let topology = Topology::build(input.topology, input.player_count)?;
    let edges = assemble_edges(&topology, input.player_count, &ids);

    info!(
        "Assembled graph with {} nodes and {} edges",
        nodes.len(),
        edges.len()
    );

    Ok(BuildReport {
        model: GraphModel { nodes, edges },
        diagnostics,
    })
}

/// One node per player, in index order
fn assemble_nodes(assignments: &AssignmentTable<'_>, ids: &IdFormatter) -> Vec<GraphNode> {
    assignments
        .iter()
        .map(|(player, record)| GraphNode::new(ids.format(player), record.state))
        .collect()
}

/// Edges numbered from 0, grouped by source in index order
fn assemble_edges(topology: &Topology, player_count: usize, ids: &IdFormatter) -> Vec<GraphEdge> {
    let mut edges = Vec::new();

    for source in 0..player_count {
        let source_id = ids.format(source);
        for target in topology.connections(source) {
            edges.push(GraphEdge {
                id: edges.len(),
                source: source_id.clone(),
                target: ids.format(target),
            });
        }
    }

    debug!(
        "Generated {} connections over {} topology",
        edges.len(),
        topology.kind()
    );
    edges
}
