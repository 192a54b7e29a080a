//! Player settings module.
//!
//! This module parses per-setting target ranges and resolves which player
//! state applies to every player index.

pub mod range;
pub mod resolver;
pub mod types;

// Re-export key types and functions for easier access
pub use range::{parse_targets, ParsedTargets, RangeOrderError, RangeToken};
pub use resolver::{default_assignment, resolve_settings};
pub use types::{AssignmentTable, ConfigurationRecord, Priority};
