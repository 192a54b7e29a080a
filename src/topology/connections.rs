//! Player connection generation.
//!
//! This file maps a source player to the players it links to for each
//! topology. Connections are undirected, so each one is reported once, from
//! its lower-indexed endpoint: a source only lists targets greater than
//! itself. That rule also removes self links.
//!
//! Lattice neighborhoods wrap around both axes. On lattices of side 3 or
//! less the wrap makes several offsets land on the same cell (a 3x3 Moore
//! lattice is a complete graph); connections are kept as sets, so such
//! aliases collapse into one link.

use std::collections::BTreeSet;

use crate::topology::types::{TopologyError, TopologyKind};

/// Offsets scanned for a Moore neighborhood, the center included
const MOORE_OFFSETS: [(isize, isize); 9] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0), (0, 0), (1, 0),
    (-1, 1), (0, 1), (1, 1),
];

/// Offsets scanned for a von Neumann neighborhood
const NEUMANN_OFFSETS: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// A square toroidal lattice, players laid out row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lattice {
    size: usize,
}

impl Lattice {
    /// Lay out `player_count` players on a square lattice, which must hold
    /// at least one player
    pub fn new(kind: TopologyKind, player_count: usize) -> Result<Self, TopologyError> {
        let size = integer_sqrt(player_count);
        if size == 0 || size * size != player_count {
            return Err(TopologyError::NonLattice { kind, player_count });
        }
        Ok(Self { size })
    }

    /// Every cell reached from `source` through `offsets`, wrapping at the
    /// edges, without the dedup filter
    pub fn neighborhood(&self, source: usize, offsets: &[(isize, isize)]) -> BTreeSet<usize> {
        let x = source % self.size;
        let y = source / self.size;

        offsets
            .iter()
            .map(|&(dx, dy)| self.wrap(x, dx) + self.wrap(y, dy) * self.size)
            .collect()
    }

    fn wrap(&self, coord: usize, delta: isize) -> usize {
        (coord + self.size).wrapping_add_signed(delta) % self.size
    }
}

/// A topology built for a fixed number of players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    Moore(Lattice),
    Neumann(Lattice),
    Ring { players: usize },
}

impl Topology {
    /// Build the topology named `name` for `player_count` players
    ///
    /// # Returns
    /// * `Err(TopologyError::UnknownTopology)` if the name is not recognized
    /// * `Err(TopologyError::NonLattice)` if a lattice topology gets a
    ///   player count that is zero or not a perfect square
    pub fn build(name: &str, player_count: usize) -> Result<Self, TopologyError> {
        let kind: TopologyKind = name.parse()?;
        Self::from_kind(kind, player_count)
    }

    pub fn from_kind(kind: TopologyKind, player_count: usize) -> Result<Self, TopologyError> {
        let topology = match kind {
            TopologyKind::Moore => Self::Moore(Lattice::new(kind, player_count)?),
            TopologyKind::Neumann => Self::Neumann(Lattice::new(kind, player_count)?),
            TopologyKind::Ring => Self::Ring {
                players: player_count,
            },
        };
        log::debug!("Built {} topology for {} players", kind, player_count);
        Ok(topology)
    }

    pub fn kind(&self) -> TopologyKind {
        match self {
            Self::Moore(_) => TopologyKind::Moore,
            Self::Neumann(_) => TopologyKind::Neumann,
            Self::Ring { .. } => TopologyKind::Ring,
        }
    }

    /// Every player `source` is adjacent to, the source itself excluded
    pub fn neighbors(&self, source: usize) -> BTreeSet<usize> {
        let mut neighbors = match self {
            Self::Moore(lattice) => lattice.neighborhood(source, &MOORE_OFFSETS),
            Self::Neumann(lattice) => lattice.neighborhood(source, &NEUMANN_OFFSETS),
            Self::Ring { players } => ring_neighbors(source, *players),
        };
        neighbors.remove(&source);
        neighbors
    }

    /// Players `source` connects to, keeping only targets above `source`
    pub fn connections(&self, source: usize) -> BTreeSet<usize> {
        self.neighbors(source).split_off(&(source + 1))
    }
}

fn ring_neighbors(source: usize, players: usize) -> BTreeSet<usize> {
    if players == 0 {
        return BTreeSet::new();
    }
    [(source + players - 1) % players, (source + 1) % players]
        .into_iter()
        .collect()
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}
