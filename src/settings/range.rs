//! Target range parsing.
//!
//! Turns a free-form target string such as `"0-4, 9"` into the set of player
//! indices it selects. Tokens are either a single index (`9`) or a half-open
//! range (`0-4` selects players 0, 1, 2 and 3). Anything else is dropped and
//! reported as a correction.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(||
    Regex::new(r"^([0-9]+)(?:-([0-9]+))?$").unwrap()
);

/// A well-formed target token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeToken {
    /// A single player index
    Single(usize),
    /// Players `start..end`, the end is exclusive
    Span { start: usize, end: usize },
}

impl RangeToken {
    /// Parse a whitespace-free token, returning `None` if it does not match
    /// the token grammar or its numbers do not fit in `usize`.
    ///
    /// A single index of `usize::MAX` is also rejected: it has no half-open
    /// range of its own.
    pub fn parse(token: &str) -> Option<Self> {
        let captures = TOKEN_PATTERN.captures(token)?;
        let start = captures.get(1)?.as_str().parse().ok()?;

        match captures.get(2) {
            Some(end) => Some(Self::Span {
                start,
                end: end.as_str().parse().ok()?,
            }),
            None => (start < usize::MAX).then_some(Self::Single(start)),
        }
    }

    /// All indices this token selects
    pub fn indices(&self) -> Result<Range<usize>, RangeOrderError> {
        match *self {
            Self::Single(index) => Ok(index..index.saturating_add(1)),
            Self::Span { start, end } if start > end => Err(RangeOrderError { start, end }),
            Self::Span { start, end } => Ok(start..end),
        }
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(index) => write!(f, "{}", index),
            Self::Span { start, end } => write!(f, "{}-{}", start, end),
        }
    }
}

/// A range token whose start is greater than its end
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("range {start}-{end} starts after it ends")]
pub struct RangeOrderError {
    pub start: usize,
    pub end: usize,
}

/// Result of parsing one target string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTargets {
    /// Selected players below the player count
    pub indices: BTreeSet<usize>,
    /// Selected indices at or above the player count, one range per token
    pub exceeding: Vec<Range<usize>>,
    /// Tokens as written, whitespace removed
    pub original: Vec<String>,
    /// Tokens that survived the grammar check, in input order
    pub corrected: Vec<String>,
    /// True if any token was dropped
    pub was_corrected: bool,
    /// Inverted ranges, which contribute no indices
    pub order_errors: Vec<(String, RangeOrderError)>,
}

impl ParsedTargets {
    /// True if the target selects no player at all, in range or not
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty() && self.exceeding.is_empty()
    }
}

/// Parse a comma separated target string for a run of `player_count` players.
///
/// Whitespace anywhere in `raw` is ignored.
pub fn parse_targets(raw: &str, player_count: usize) -> ParsedTargets {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    let mut parsed = ParsedTargets {
        original: stripped.split(',').map(str::to_string).collect(),
        ..ParsedTargets::default()
    };

    for text in &parsed.original {
        let Some(token) = RangeToken::parse(text) else {
            continue;
        };
        parsed.corrected.push(text.clone());

        match token.indices() {
            Ok(range) => {
                let in_range_end = range.end.min(player_count);
                parsed.indices.extend(range.start..in_range_end);

                let excess_start = range.start.max(player_count);
                if excess_start < range.end {
                    parsed.exceeding.push(excess_start..range.end);
                }
            }
            Err(e) => {
                log::debug!("Skipping target token '{}': {}", text, e);
                parsed.order_errors.push((text.clone(), e));
            }
        }
    }

    parsed.was_corrected = parsed.corrected.len() != parsed.original.len();
    parsed
}
