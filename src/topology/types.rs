//! Topology type definitions.
//!
//! This file contains the names of the player topologies the generator
//! supports and the errors raised while building them.

use std::fmt;
use std::str::FromStr;

/// Kind of player topology to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopologyKind {
    /// Toroidal lattice, 8 neighbors including diagonals
    Moore,
    /// Toroidal lattice, 4 orthogonal neighbors
    Neumann,
    /// Each player links to its predecessor and successor
    Ring,
}

impl TopologyKind {
    /// Name used in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            Self::Moore => "Moore",
            Self::Neumann => "Neumann",
            Self::Ring => "Ring",
        }
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TopologyKind {
    type Err = TopologyError;

    /// Names are matched exactly, `"moore"` is not `"Moore"`
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "Moore" => Ok(Self::Moore),
            "Neumann" => Ok(Self::Neumann),
            "Ring" => Ok(Self::Ring),
            _ => Err(TopologyError::UnknownTopology {
                name: name.to_string(),
            }),
        }
    }
}

/// Errors that abort topology construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("Unknown topology '{name}', player connections cannot be built")]
    UnknownTopology { name: String },

    #[error("{kind} topology requires a square number of players, got {player_count}")]
    NonLattice {
        kind: TopologyKind,
        player_count: usize,
    },
}
