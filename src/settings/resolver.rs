//! Per-range player settings resolution.
//!
//! Each setting entry claims the players its target selects. Entries are
//! processed in declaration order and the first claim on a player wins; later
//! claims are reported and ignored. Players nobody claims receive the default
//! state.

use log::{debug, info};

use crate::config::{PlayerState, SettingEntry};
use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::settings::range::parse_targets;
use crate::settings::types::{AssignmentTable, ConfigurationRecord, Priority};

/// Resolve the player state for each of `player_count` players
///
/// # Arguments
/// * `player_count` - Number of players in the run
/// * `entries` - Setting entries, highest precedence first
/// * `default` - State for players no entry claims
/// * `diagnostics` - Receives corrections, conflicts and alerts
///
/// # Returns
/// A table with exactly one record for every index in `0..player_count`
pub fn resolve_settings<'a>(
    player_count: usize,
    entries: &'a [SettingEntry],
    default: &'a PlayerState,
    diagnostics: &mut Diagnostics,
) -> AssignmentTable<'a> {
    info!(
        "Resolving {} player setting(s) for {} players",
        entries.len(),
        player_count
    );

    let mut owners: Vec<Option<usize>> = vec![None; player_count];
    let mut records = Vec::with_capacity(entries.len() + 1);

    for (position, entry) in entries.iter().enumerate() {
        let setting = position + 1;
        let parsed = parse_targets(&entry.target, player_count);

        if parsed.was_corrected {
            diagnostics.push(Diagnostic::new(
                setting,
                DiagnosticKind::TargetsCorrected {
                    original: parsed.original.clone(),
                    corrected: parsed.corrected.clone(),
                },
            ));
        }

        for (token, _) in &parsed.order_errors {
            diagnostics.push(Diagnostic::new(
                setting,
                DiagnosticKind::RangeOrder {
                    token: token.clone(),
                },
            ));
        }

        if parsed.is_empty() {
            diagnostics.push(Diagnostic::new(setting, DiagnosticKind::EmptyTargets));
        }

        for players in &parsed.exceeding {
            diagnostics.push(Diagnostic::new(
                setting,
                DiagnosticKind::TargetOutOfRange {
                    players: players.clone(),
                    player_count,
                },
            ));
        }

        // Record position always matches the entry position
        records.push(ConfigurationRecord {
            priority: Priority::Setting(setting),
            state: &entry.state,
        });

        let mut claimed = 0usize;
        for &player in &parsed.indices {
            match owners[player] {
                Some(owner) => diagnostics.push(Diagnostic::new(
                    setting,
                    DiagnosticKind::DuplicateTarget {
                        player,
                        owner: owner + 1,
                    },
                )),
                None => {
                    owners[player] = Some(position);
                    claimed += 1;
                }
            }
        }

        debug!("Setting {} claimed {} player(s)", setting, claimed);
    }

    let default_slot = records.len();
    records.push(ConfigurationRecord {
        priority: Priority::Default,
        state: default,
    });

    let slots: Vec<usize> = owners
        .into_iter()
        .map(|owner| owner.unwrap_or(default_slot))
        .collect();

    let table = AssignmentTable::new(records, slots);
    debug!(
        "{} player(s) fall back to the default state",
        table.count_for(Priority::Default)
    );
    table
}

/// Assign the default state to every player, used when settings are disabled
pub fn default_assignment(player_count: usize, default: &PlayerState) -> AssignmentTable<'_> {
    debug!("Player settings disabled, applying default state to all players");
    AssignmentTable::uniform(player_count, default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;

    fn state(strategy: &str) -> PlayerState {
        PlayerState {
            pre_action: "C".to_string(),
            action: "C".to_string(),
            pre_score: 0.0,
            score: 0.0,
            pre_strategy: strategy.to_string(),
            strategy: strategy.to_string(),
        }
    }

    fn entry(target: &str, strategy: &str) -> SettingEntry {
        SettingEntry {
            target: target.to_string(),
            state: state(strategy),
        }
    }

    #[test]
    fn test_first_setting_wins() {
        let entries = vec![entry("2", "A"), entry("1-3", "B")];
        let default = state("DEFAULT");
        let mut diagnostics = Diagnostics::new();

        let table = resolve_settings(5, &entries, &default, &mut diagnostics);

        assert_eq!(table.get(2).unwrap().priority, Priority::Setting(1));
        assert_eq!(table.get(2).unwrap().state.strategy, "A");
        assert_eq!(table.get(1).unwrap().priority, Priority::Setting(2));
        assert_eq!(table.get(0).unwrap().priority, Priority::Default);
        assert_eq!(table.get(4).unwrap().state.strategy, "DEFAULT");

        assert_eq!(diagnostics.info.len(), 1);
        let duplicate = &diagnostics.info[0];
        assert_eq!(duplicate.setting, 2);
        assert_eq!(
            duplicate.kind,
            DiagnosticKind::DuplicateTarget {
                player: 2,
                owner: 1
            }
        );
        assert!(diagnostics.alerts.is_empty());
    }

    #[test]
    fn test_table_is_total() {
        let entries = vec![
            entry("0-3", "A"),
            entry("5-2, x", "B"),
            entry("7, 40", "C"),
            entry("2-9", "D"),
        ];
        let default = state("DEFAULT");

        for player_count in [1usize, 3, 8, 10, 25] {
            let mut diagnostics = Diagnostics::new();
            let table = resolve_settings(player_count, &entries, &default, &mut diagnostics);
            assert_eq!(table.len(), player_count);
            assert_eq!(table.iter().count(), player_count);
            for player in 0..player_count {
                assert!(table.get(player).is_some(), "player {} unassigned", player);
            }
            assert!(table.get(player_count).is_none());
        }
    }

    #[test]
    fn test_out_of_range_targets_are_reported() {
        let entries = vec![entry("3, 6-9", "A")];
        let default = state("DEFAULT");
        let mut diagnostics = Diagnostics::new();

        let table = resolve_settings(4, &entries, &default, &mut diagnostics);

        assert_eq!(table.get(3).unwrap().priority, Priority::Setting(1));
        assert_eq!(table.count_for(Priority::Default), 3);
        assert_eq!(
            diagnostics.info,
            vec![Diagnostic::new(
                1,
                DiagnosticKind::TargetOutOfRange {
                    players: 6..9,
                    player_count: 4
                }
            )]
        );
        assert!(!diagnostics.is_blocked());
    }

    #[test]
    fn test_out_of_range_reported_per_token() {
        let entries = vec![entry("5, 7-1000000, 2", "A")];
        let default = state("DEFAULT");
        let mut diagnostics = Diagnostics::new();

        resolve_settings(4, &entries, &default, &mut diagnostics);

        let skipped: Vec<_> = diagnostics
            .info
            .iter()
            .map(|d| match &d.kind {
                DiagnosticKind::TargetOutOfRange { players, .. } => players.clone(),
                other => panic!("unexpected diagnostic {:?}", other),
            })
            .collect();
        assert_eq!(skipped, vec![5..6, 7..1_000_000]);
    }

    #[test]
    fn test_only_out_of_range_targets_do_not_block() {
        let entries = vec![entry("10", "A")];
        let default = state("DEFAULT");
        let mut diagnostics = Diagnostics::new();

        let table = resolve_settings(4, &entries, &default, &mut diagnostics);

        assert_eq!(table.count_for(Priority::Default), 4);
        assert!(!diagnostics.is_blocked());
        assert_eq!(diagnostics.info[0].code(), "target-out-of-range");
    }

    #[test]
    fn test_corrections_and_alerts() {
        let entries = vec![entry("1, abc", "A"), entry("5-3", "B"), entry("x,y", "C")];
        let default = state("DEFAULT");
        let mut diagnostics = Diagnostics::new();

        let table = resolve_settings(8, &entries, &default, &mut diagnostics);

        assert_eq!(table.get(1).unwrap().priority, Priority::Setting(1));
        assert!(diagnostics.is_blocked());

        let codes: Vec<(usize, &str)> = diagnostics
            .iter()
            .map(|d| (d.setting, d.code()))
            .collect();
        assert_eq!(
            codes,
            vec![
                (1, "targets-corrected"),
                (3, "targets-corrected"),
                (2, "range-order"),
                (2, "empty-targets"),
                (3, "empty-targets"),
            ]
        );
        assert!(diagnostics
            .alerts
            .iter()
            .all(|d| d.severity() == Severity::Alert));
    }

    #[test]
    fn test_inverted_range_alongside_valid_token() {
        let entries = vec![entry("5-3, 1", "A")];
        let default = state("DEFAULT");
        let mut diagnostics = Diagnostics::new();

        let table = resolve_settings(8, &entries, &default, &mut diagnostics);

        assert_eq!(table.count_for(Priority::Setting(1)), 1);
        assert_eq!(diagnostics.alerts.len(), 1);
        assert!(!diagnostics.is_blocked());
    }

    #[test]
    fn test_default_assignment() {
        let default = state("DEFAULT");
        let table = default_assignment(6, &default);
        assert_eq!(table.len(), 6);
        assert_eq!(table.count_for(Priority::Default), 6);
    }
}
