use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::common::errors::BroomError;

/// Recursively collect every entry under `directory` whose base name matches
/// at least one pattern.
///
/// Patterns are plain globs (`*`, `?`, `[...]`) applied to base names only,
/// so `*.log` matches at any depth. Empty pattern strings are inert rather
/// than match-alls. The walk visits entries in file-name order and does not
/// follow symlinks.
///
/// A malformed pattern or an unreadable root is an error. Unreadable entries
/// below the root are logged and skipped; the walk keeps going.
pub fn find_matches(directory: &Path, patterns: &[String]) -> Result<Vec<PathBuf>, BroomError> {
    let compiled = compile_patterns(patterns)?;
    if compiled.is_empty() {
        return Ok(Vec::new());
    }

    let mut matches = Vec::new();

    let walker = WalkDir::new(directory)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(BroomError::Walk {
                    dir: directory.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy();
        if compiled.iter().any(|p| p.matches(&name)) {
            debug!(file = %entry.path().display(), "matched");
            matches.push(entry.into_path());
        }
    }

    debug!(
        dir = %directory.display(),
        count = matches.len(),
        "walk complete"
    );

    Ok(matches)
}

/// Compile globs up front so a bad pattern fails the rule before any
/// filesystem work. Empty strings are dropped.
fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>, BroomError> {
    patterns
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| {
            Pattern::new(p).map_err(|source| BroomError::Pattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}
