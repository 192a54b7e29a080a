//! Structured build diagnostics.
//!
//! Settings resolution never fails outright. Instead it collects
//! informational messages (auto-corrected targets, ignored duplicates,
//! out-of-range players) and alerts (inverted ranges, empty targets) that the
//! caller renders however it likes.

use std::fmt;
use std::ops::Range;

/// How serious a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Non-blocking, the build continues
    Info,
    /// Needs the user's attention; blocking for some kinds
    Alert,
}

/// What a diagnostic is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Malformed target tokens were dropped
    TargetsCorrected {
        original: Vec<String>,
        corrected: Vec<String>,
    },
    /// Targets at or above the player count were skipped. Reported once per
    /// target token, carrying the skipped index range, not once per index
    TargetOutOfRange {
        players: Range<usize>,
        player_count: usize,
    },
    /// The player was already claimed by an earlier setting
    DuplicateTarget { player: usize, owner: usize },
    /// A range token whose start is greater than its end
    RangeOrder { token: String },
    /// The setting selects no players at all
    EmptyTargets,
}

/// A single message tied to the setting that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based position of the setting entry
    pub setting: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(setting: usize, kind: DiagnosticKind) -> Self {
        Self { setting, kind }
    }

    pub fn severity(&self) -> Severity {
        match self.kind {
            DiagnosticKind::TargetsCorrected { .. }
            | DiagnosticKind::TargetOutOfRange { .. }
            | DiagnosticKind::DuplicateTarget { .. } => Severity::Info,
            DiagnosticKind::RangeOrder { .. } | DiagnosticKind::EmptyTargets => Severity::Alert,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self.kind {
            DiagnosticKind::TargetsCorrected { .. } => "targets-corrected",
            DiagnosticKind::TargetOutOfRange { .. } => "target-out-of-range",
            DiagnosticKind::DuplicateTarget { .. } => "duplicate-target",
            DiagnosticKind::RangeOrder { .. } => "range-order",
            DiagnosticKind::EmptyTargets => "empty-targets",
        }
    }

    /// Whether this diagnostic stops graph assembly.
    ///
    /// An inverted range only removes its own players; the setting blocks the
    /// build once none of its tokens selects anything.
    pub fn is_blocking(&self) -> bool {
        matches!(self.kind, DiagnosticKind::EmptyTargets)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Setting {}: ", self.setting)?;
        match &self.kind {
            DiagnosticKind::TargetsCorrected { original, corrected } => write!(
                f,
                "target changed from '{}' to '{}'",
                original.join(","),
                corrected.join(",")
            ),
            DiagnosticKind::TargetOutOfRange {
                players,
                player_count,
            } => {
                if players.len() == 1 {
                    write!(
                        f,
                        "target {} exceeds player count {}",
                        players.start, player_count
                    )
                } else {
                    write!(
                        f,
                        "targets {}..{} exceed player count {}",
                        players.start, players.end, player_count
                    )
                }
            }
            DiagnosticKind::DuplicateTarget { player, owner } => write!(
                f,
                "player {} is already configured by setting {}, ignored",
                player, owner
            ),
            DiagnosticKind::RangeOrder { token } => {
                write!(f, "invalid range '{}', start is greater than end", token)
            }
            DiagnosticKind::EmptyTargets => write!(f, "target is empty"),
        }
    }
}

/// Informational and alert messages collected during one build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub info: Vec<Diagnostic>,
    pub alerts: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic in the list matching its severity
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Info => {
                log::debug!("{}", diagnostic);
                self.info.push(diagnostic);
            }
            Severity::Alert => {
                log::debug!("alert: {}", diagnostic);
                self.alerts.push(diagnostic);
            }
        }
    }

    /// True if any collected alert prevents assembly
    pub fn is_blocked(&self) -> bool {
        self.blocking_count() > 0
    }

    /// Number of alerts that prevent assembly
    pub fn blocking_count(&self) -> usize {
        self.alerts.iter().filter(|d| d.is_blocking()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.info.is_empty() && self.alerts.is_empty()
    }

    /// All diagnostics, informational first
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.info.iter().chain(self.alerts.iter())
    }
}
