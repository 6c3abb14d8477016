use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Record of one decision the engine made: an action taken, a skip, or a
/// failure. Every candidate file produces exactly one of these; a rule
/// abandoned wholesale produces a single rule-level record.
#[derive(Debug, Clone, Serialize)]
pub struct ActionOutcome {
    /// Name of the rule that produced this outcome.
    pub rule: String,
    /// Matched source path. For rule-level outcomes, the source directory.
    pub path: PathBuf,
    /// Destination path, when the action has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<PathBuf>,
    pub action: ActionKind,
    pub status: OutcomeStatus,
    /// Human-readable description. Identical between dry and real runs.
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Remove,
    Copy,
    Move,
}

/// Decision taxonomy. Rule-level skips, file-level skips, and file-level
/// failures stay distinct so a misconfigured rule reads differently from a
/// name collision or an I/O problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// The action was carried out, or would have been under dry-run.
    Performed,
    /// The whole rule was abandoned, e.g. its destination directory is
    /// missing. No file under it was touched.
    RuleSkipped,
    /// This one file was passed over, e.g. its destination name is taken.
    FileSkipped,
    /// The primitive failed for this file. Siblings still ran.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl OutcomeStatus {
    /// Log severity for this status: performed actions are routine, skips
    /// are warnings, failures are errors.
    pub fn severity(self) -> Severity {
        match self {
            OutcomeStatus::Performed => Severity::Info,
            OutcomeStatus::RuleSkipped | OutcomeStatus::FileSkipped => Severity::Warn,
            OutcomeStatus::Failed => Severity::Error,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Remove => write!(f, "remove"),
            ActionKind::Copy => write!(f, "copy"),
            ActionKind::Move => write!(f, "move"),
        }
    }
}
