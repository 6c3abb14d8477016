pub mod fsops;
pub mod matcher;
pub mod outcome;

pub use matcher::find_matches;
pub use outcome::{ActionKind, ActionOutcome, OutcomeStatus, Severity};

use std::path::PathBuf;
use tracing::{error, info, warn};

use crate::common::config::{CleanupRule, RelocateMode, RelocateRule};
use crate::common::errors::BroomError;
use crate::common::safety;

/// Run every cleanup rule in declaration order, deleting matched files.
///
/// One unreadable or undeletable file never aborts the batch: it becomes a
/// failed outcome and the remaining candidates still run. Only
/// configuration-shaped problems (bad glob, unreadable walk root, dangling
/// environment variable, protected match) abort with an error.
///
/// With `dry_run` set nothing is deleted, but the returned outcomes and the
/// emitted log events are the same as a real run's.
pub fn run_cleanup(rules: &[CleanupRule], dry_run: bool) -> Result<Vec<ActionOutcome>, BroomError> {
    let mut outcomes = Vec::new();

    for rule in rules {
        let src_dir = expand_path(&rule.src)?;
        info!(rule = %rule.name, src = %src_dir.display(), "running cleanup rule");

        let files = matcher::find_matches(&src_dir, &rule.patterns)?;
        guard_protected(&files)?;

        for path in files {
            let result = if dry_run {
                Ok(())
            } else {
                fsops::remove_path(&path)
            };

            let outcome = match result {
                Ok(()) => {
                    let message = format!("remove file: {}", path.display());
                    info!(rule = %rule.name, src = %path.display(), "{}", message);
                    ActionOutcome {
                        rule: rule.name.clone(),
                        path,
                        destination: None,
                        action: ActionKind::Remove,
                        status: OutcomeStatus::Performed,
                        message,
                    }
                }
                Err(err) => {
                    error!(rule = %rule.name, src = %path.display(), error = %err, "error removing file");
                    ActionOutcome {
                        rule: rule.name.clone(),
                        path,
                        destination: None,
                        action: ActionKind::Remove,
                        status: OutcomeStatus::Failed,
                        message: format!("error removing file: {err}"),
                    }
                }
            };
            outcomes.push(outcome);
        }
    }

    Ok(outcomes)
}

/// Run every relocate rule in declaration order, copying or moving matched
/// files into the rule's destination directory under their base names.
///
/// A rule matching nothing produces no outcomes. A missing destination
/// directory skips the whole rule; a taken destination name skips that one
/// file; an I/O failure fails that one file. In every case the remaining
/// work continues. Fatal errors are the same configuration-shaped set as
/// [`run_cleanup`]'s.
pub fn run_relocate(
    rules: &[RelocateRule],
    dry_run: bool,
) -> Result<Vec<ActionOutcome>, BroomError> {
    let mut outcomes = Vec::new();

    for rule in rules {
        let src_dir = expand_path(&rule.src)?;
        let dst_dir = expand_path(&rule.dst)?;
        info!(
            rule = %rule.name,
            src = %src_dir.display(),
            dst = %dst_dir.display(),
            mode = %rule.mode,
            "running relocate rule"
        );

        let files = matcher::find_matches(&src_dir, &rule.patterns)?;
        guard_protected(&files)?;
        if files.is_empty() {
            continue;
        }

        let action = ActionKind::from(rule.mode);

        // A missing destination is a misconfigured rule, not an empty one.
        if !dst_dir.exists() {
            let message = format!("skip missing destination: {}", dst_dir.display());
            warn!(rule = %rule.name, dst = %dst_dir.display(), "skip missing destination");
            outcomes.push(ActionOutcome {
                rule: rule.name.clone(),
                path: src_dir.clone(),
                destination: Some(dst_dir),
                action,
                status: OutcomeStatus::RuleSkipped,
                message,
            });
            continue;
        }

        for path in files {
            let Some(file_name) = path.file_name() else {
                // Only reachable for roots like "/", which have no base name.
                warn!(rule = %rule.name, src = %path.display(), "skip entry without a file name");
                continue;
            };
            let base = file_name.to_string_lossy().into_owned();
            let dst_path = dst_dir.join(file_name);

            if dst_path.exists() {
                let message = format!("skip file: {base}");
                warn!(
                    rule = %rule.name,
                    src = %path.display(),
                    dst = %dst_path.display(),
                    "{}", message
                );
                outcomes.push(ActionOutcome {
                    rule: rule.name.clone(),
                    path,
                    destination: Some(dst_path),
                    action,
                    status: OutcomeStatus::FileSkipped,
                    message,
                });
                continue;
            }

            let result = if dry_run {
                Ok(())
            } else {
                match rule.mode {
                    RelocateMode::Copy => fsops::copy_file(&path, &dst_path),
                    RelocateMode::Move => fsops::move_file(&path, &dst_path),
                }
            };

            let outcome = match result {
                Ok(()) => {
                    let message = format!("{action} file: {base}");
                    info!(
                        rule = %rule.name,
                        src = %path.display(),
                        dst = %dst_path.display(),
                        mode = %rule.mode,
                        "{}", message
                    );
                    ActionOutcome {
                        rule: rule.name.clone(),
                        path,
                        destination: Some(dst_path),
                        action,
                        status: OutcomeStatus::Performed,
                        message,
                    }
                }
                Err(err) => {
                    let label = match rule.mode {
                        RelocateMode::Copy => "error copying file",
                        RelocateMode::Move => "error moving file",
                    };
                    error!(
                        rule = %rule.name,
                        src = %path.display(),
                        dst = %dst_path.display(),
                        error = %err,
                        "{}", label
                    );
                    ActionOutcome {
                        rule: rule.name.clone(),
                        path,
                        destination: Some(dst_path),
                        action,
                        status: OutcomeStatus::Failed,
                        message: format!("{label}: {err}"),
                    }
                }
            };
            outcomes.push(outcome);
        }
    }

    Ok(outcomes)
}

impl From<RelocateMode> for ActionKind {
    fn from(mode: RelocateMode) -> Self {
        match mode {
            RelocateMode::Copy => ActionKind::Copy,
            RelocateMode::Move => ActionKind::Move,
        }
    }
}

/// Resolve `$VAR`, `${VAR}`, and a leading `~` in a rule path at point of
/// use. An unresolvable reference is a configuration error, not an empty
/// string silently pointing somewhere else.
fn expand_path(input: &str) -> Result<PathBuf, BroomError> {
    let expanded = shellexpand::full(input).map_err(|source| BroomError::Expand {
        input: input.to_string(),
        source,
    })?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Refuse to act on a match set containing a protected location.
fn guard_protected(paths: &[PathBuf]) -> Result<(), BroomError> {
    match safety::first_protected(paths) {
        Some(path) => Err(BroomError::Protected {
            path: path.to_path_buf(),
        }),
        None => Ok(()),
    }
}
