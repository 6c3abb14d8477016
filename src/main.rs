use anyhow::Result;
use clap::Parser;

use broom::cli::args::{Cli, Commands, CompletionShell, OutputFormat};
use broom::cli::output;
use broom::common::config::Config;
use broom::common::logging;
use broom::engine;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Cleanup { dry_run } => cmd_cleanup(&cli, dry_run),
        Commands::Relocate { dry_run } => cmd_relocate(&cli, dry_run),
        Commands::Rules => cmd_rules(&cli),

        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            let shell = match shell {
                CompletionShell::Bash => clap_complete::Shell::Bash,
                CompletionShell::Zsh => clap_complete::Shell::Zsh,
                CompletionShell::Fish => clap_complete::Shell::Fish,
                CompletionShell::Powershell => clap_complete::Shell::PowerShell,
            };
            clap_complete::generate(shell, &mut cmd, "broom", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Load the configuration and bring up logging, in that order: the config
/// supplies the default level and format, `-v` overrides the level.
fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config, cli.verbose)?;

    if let Some(path) = &config.loaded_from {
        tracing::info!(config = %path.display(), "using config file");
    }
    Ok(config)
}

// ─── Cleanup ──────────────────────────────────────────────────────────────────

fn cmd_cleanup(cli: &Cli, dry_run: bool) -> Result<()> {
    let config = load_config(cli)?;
    let outcomes = engine::run_cleanup(&config.cleanup, dry_run)?;

    match cli.format {
        OutputFormat::Human => output::print_summary("Cleanup", &outcomes, dry_run),
        OutputFormat::Json => output::print_outcomes_json(&outcomes)?,
        OutputFormat::Quiet => output::print_outcomes_quiet(&outcomes),
    }
    Ok(())
}

// ─── Relocate ─────────────────────────────────────────────────────────────────

fn cmd_relocate(cli: &Cli, dry_run: bool) -> Result<()> {
    let config = load_config(cli)?;
    let outcomes = engine::run_relocate(&config.relocate, dry_run)?;

    match cli.format {
        OutputFormat::Human => output::print_summary("Relocate", &outcomes, dry_run),
        OutputFormat::Json => output::print_outcomes_json(&outcomes)?,
        OutputFormat::Quiet => output::print_outcomes_quiet(&outcomes),
    }
    Ok(())
}

// ─── Rules ────────────────────────────────────────────────────────────────────

fn cmd_rules(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    match cli.format {
        OutputFormat::Human => output::print_rules(&config),
        OutputFormat::Json => output::print_rules_json(&config)?,
        OutputFormat::Quiet => output::print_rules_quiet(&config),
    }
    Ok(())
}
