use colored::*;

use crate::common::config::Config;
use crate::engine::{ActionOutcome, OutcomeStatus, Severity};

/// Performed / skipped / failed counts for a batch of outcomes.
pub struct Tally {
    pub performed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Count outcomes by status. Rule-level and file-level skips fold together
/// here; the detail lines keep them apart.
pub fn tally(outcomes: &[ActionOutcome]) -> Tally {
    Tally {
        performed: outcomes
            .iter()
            .filter(|o| o.status == OutcomeStatus::Performed)
            .count(),
        skipped: outcomes
            .iter()
            .filter(|o| {
                matches!(
                    o.status,
                    OutcomeStatus::RuleSkipped | OutcomeStatus::FileSkipped
                )
            })
            .count(),
        failed: outcomes
            .iter()
            .filter(|o| o.status == OutcomeStatus::Failed)
            .count(),
    }
}

/// Print a human-readable run summary: counts up top, then one line per
/// skip or failure so nothing silent hides in the tally.
pub fn print_summary(title: &str, outcomes: &[ActionOutcome], dry_run: bool) {
    let counts = tally(outcomes);

    println!();
    if dry_run {
        println!("  🧹 {} {}", title, "(dry run)".yellow());
    } else {
        println!("  🧹 {}", title);
    }
    println!("{}", "─".repeat(60).dimmed());

    if outcomes.is_empty() {
        println!("  ✨ Nothing to do: no rule matched any files");
        println!();
        return;
    }

    let verb = if dry_run { "would perform" } else { "performed" };
    println!(
        "  {} {} {}  •  {} skipped  •  {} failed",
        "✓".green(),
        counts.performed,
        verb,
        counts.skipped,
        counts.failed
    );

    let problems: Vec<&ActionOutcome> = outcomes
        .iter()
        .filter(|o| o.status != OutcomeStatus::Performed)
        .collect();

    if !problems.is_empty() {
        println!();
        for outcome in problems {
            let marker = match outcome.status.severity() {
                Severity::Error => "✗".red(),
                _ => "⚠".yellow(),
            };
            println!(
                "    {} [{}] {}",
                marker,
                outcome.rule.dimmed(),
                outcome.message
            );
        }
    }
    println!();
}

/// Pretty-printed JSON array of every outcome, for piping.
pub fn print_outcomes_json(outcomes: &[ActionOutcome]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(outcomes)?);
    Ok(())
}

/// One line, three numbers: performed, skipped, failed.
pub fn print_outcomes_quiet(outcomes: &[ActionOutcome]) {
    let counts = tally(outcomes);
    println!("{} {} {}", counts.performed, counts.skipped, counts.failed);
}

/// Print the parsed rule set in human-readable form.
pub fn print_rules(config: &Config) {
    println!();
    println!("  🧹 Configured rules");
    println!("{}", "─".repeat(60).dimmed());

    if config.relocate.is_empty() && config.cleanup.is_empty() {
        println!("  ✨ No rules configured");
        println!();
        return;
    }

    if !config.relocate.is_empty() {
        println!("  {} ({})", "Relocate".bold(), config.relocate.len());
        for rule in &config.relocate {
            println!(
                "    {} {}  {} {} {}  [{}]",
                "•".cyan(),
                rule.name,
                rule.src.dimmed(),
                "→".dimmed(),
                rule.dst.dimmed(),
                rule.mode
            );
            print_patterns(&rule.patterns);
        }
        println!();
    }

    if !config.cleanup.is_empty() {
        println!("  {} ({})", "Cleanup".bold(), config.cleanup.len());
        for rule in &config.cleanup {
            println!("    {} {}  {}", "•".cyan(), rule.name, rule.src.dimmed());
            print_patterns(&rule.patterns);
        }
        println!();
    }
}

fn print_patterns(patterns: &[String]) {
    if patterns.is_empty() {
        println!("      {}", "(no patterns; rule is inert)".yellow());
    } else {
        println!("      {}", patterns.join(", ").dimmed());
    }
}

/// JSON dump of the rule lists.
pub fn print_rules_json(config: &Config) -> anyhow::Result<()> {
    let value = serde_json::json!({
        "relocate": &config.relocate,
        "cleanup": &config.cleanup,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Rule names only, one per line, tagged by kind.
pub fn print_rules_quiet(config: &Config) {
    for rule in &config.relocate {
        println!("relocate\t{}", rule.name);
    }
    for rule in &config.cleanup {
        println!("cleanup\t{}", rule.name);
    }
}
