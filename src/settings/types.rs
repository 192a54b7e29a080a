//! Resolved player configuration types.

use std::fmt;

use crate::config::PlayerState;

/// Precedence of a configuration record.
///
/// Settings are numbered from 1 in the order they are declared; lower
/// numbers win. The default record sorts after every setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Setting(usize),
    Default,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setting(n) => write!(f, "setting {}", n),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A player state together with the precedence it was declared at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigurationRecord<'a> {
    pub priority: Priority,
    pub state: &'a PlayerState,
}

/// The record applying to each player index.
///
/// Always total: every index in `0..len()` has exactly one record.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentTable<'a> {
    records: Vec<ConfigurationRecord<'a>>,
    slots: Vec<usize>,
}

impl<'a> AssignmentTable<'a> {
    /// Build a table from its records and the record position for each player.
    ///
    /// Every slot must point into `records`.
    pub(crate) fn new(records: Vec<ConfigurationRecord<'a>>, slots: Vec<usize>) -> Self {
        debug_assert!(slots.iter().all(|&slot| slot < records.len()));
        Self { records, slots }
    }

    /// A table assigning `state` to every one of `player_count` players
    pub fn uniform(player_count: usize, state: &'a PlayerState) -> Self {
        Self::new(
            vec![ConfigurationRecord {
                priority: Priority::Default,
                state,
            }],
            vec![0; player_count],
        )
    }

    /// Number of players covered
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The record for `player`, if it is in range
    pub fn get(&self, player: usize) -> Option<&ConfigurationRecord<'a>> {
        self.slots.get(player).and_then(|&slot| self.records.get(slot))
    }

    /// Records in player index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ConfigurationRecord<'a>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(player, &slot)| self.records.get(slot).map(|record| (player, record)))
    }

    /// Number of players assigned to the given priority
    pub fn count_for(&self, priority: Priority) -> usize {
        self.iter()
            .filter(|(_, record)| record.priority == priority)
            .count()
    }
}
