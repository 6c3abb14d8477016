use std::path::PathBuf;
use thiserror::Error;

/// Typed errors for the rule engine.
/// The CLI wraps everything in `anyhow` for reporting, but these variants
/// keep the engine's failure taxonomy precise: anything represented here is
/// configuration-shaped and aborts the invocation, while per-file problems
/// are recorded as outcomes and never raised as errors.
#[derive(Debug, Error)]
pub enum BroomError {
    /// The root of a walk is missing or unreadable. Unreadable entries
    /// below the root are warned about and skipped instead.
    #[error("cannot read source directory '{}'", .dir.display())]
    Walk {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A rule carries a malformed glob pattern. Distinct from "no match".
    #[error("invalid glob pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A rule path references an environment variable that is not set.
    #[error("cannot expand rule path '{input}'")]
    Expand {
        input: String,
        #[source]
        source: shellexpand::LookupError<std::env::VarError>,
    },

    /// A rule matched a location broom refuses to touch.
    #[error("refusing to act on protected path '{}'", .path.display())]
    Protected { path: PathBuf },
}

/// Failure reasons surfaced by the file primitives. The primitives never
/// log; the engine inspects these and decides per item whether to continue.
#[derive(Debug, Error)]
pub enum FileOpError {
    /// The source of a copy or move does not exist.
    #[error("source missing: '{}'", .path.display())]
    SourceMissing { path: PathBuf },

    /// A file of the destination name already exists; broom never overwrites.
    #[error("destination already exists: '{}'", .path.display())]
    DestinationExists { path: PathBuf },

    /// The underlying filesystem call failed.
    #[error("{action} failed for '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
