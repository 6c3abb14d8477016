use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// broom: rule-driven file housekeeping
#[derive(Parser, Debug)]
#[command(
    name = "broom",
    version,
    about = "Rule-driven file housekeeping",
    long_about = "broom reads declarative rules from a TOML file and sweeps up after you:\n\
                  cleanup rules delete files matching glob patterns, relocate rules copy\n\
                  or move them into a destination directory. Dry-run before you commit.",
    after_help = "EXAMPLES:\n  \
        broom cleanup --dry-run                Preview what the cleanup rules would delete\n  \
        broom cleanup                          Delete files matched by the cleanup rules\n  \
        broom relocate -d                      Preview copy/move actions without touching files\n  \
        broom relocate                         Shelve files according to the relocate rules\n  \
        broom rules                            Show the parsed rule set\n  \
        broom -c ./broom.toml cleanup          Use an explicit configuration file\n  \
        broom -vvvv relocate                   One run with debug-level logging\n  \
        broom completions zsh                  Generate zsh completions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (default search: ./broom.toml, ~/.config/broom.toml, /etc/broom/broom.toml)
    #[arg(long, short, global = true, value_name = "FILE", env = "BROOM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log verbosity: -v errors, -vv warnings, -vvv info, -vvvv debug
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Delete files matched by the cleanup rules
    Cleanup {
        /// Report what would be removed without deleting anything
        #[arg(long, short = 'd')]
        dry_run: bool,
    },

    /// Copy or move files matched by the relocate rules
    Relocate {
        /// Report what would be relocated without touching anything
        #[arg(long, short = 'd')]
        dry_run: bool,
    },

    /// Show the rule set parsed from the configuration file
    Rules,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Quiet,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}
