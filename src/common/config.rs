use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Configuration schema major version this binary understands.
/// Files declaring an older major are rejected as outdated.
pub const API_MAJOR: u64 = 1;

const CONFIG_FILE: &str = "broom.toml";

/// Root of the broom configuration file: a schema version, logging defaults,
/// and the two rule lists. Rules run in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version, e.g. `"v1.0"`. Required so old files fail loudly
    /// instead of being misread.
    pub api_version: String,

    #[serde(default)]
    pub defaults: Defaults,

    #[serde(default)]
    pub relocate: Vec<RelocateRule>,

    #[serde(default)]
    pub cleanup: Vec<CleanupRule>,

    /// Where this config was read from. Not part of the file itself.
    #[serde(skip)]
    pub loaded_from: Option<PathBuf>,
}

/// Logging defaults. The `-v` flag overrides the level per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    #[serde(default)]
    pub logformat: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// One relocate task: copy or move files matching `patterns` out of `src`
/// into `dst`, keeping their base names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelocateRule {
    pub name: String,
    pub src: String,
    pub dst: String,
    #[serde(default)]
    pub patterns: Vec<String>,
    pub mode: RelocateMode,
}

/// One cleanup task: delete files matching `patterns` under `src`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupRule {
    pub name: String,
    pub src: String,
    #[serde(default)]
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelocateMode {
    Copy,
    Move,
}

fn default_loglevel() -> String {
    "error".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            loglevel: default_loglevel(),
            logformat: LogFormat::default(),
        }
    }
}

impl fmt::Display for RelocateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelocateMode::Copy => write!(f, "copy"),
            RelocateMode::Move => write!(f, "move"),
        }
    }
}

impl Config {
    /// Candidate config locations, in search order: working directory,
    /// user config directory, system-wide.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(CONFIG_FILE));
        }
        paths.push(PathBuf::from("/etc/broom").join(CONFIG_FILE));
        paths
    }

    /// Load the configuration from an explicit path, or from the first
    /// search path that exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => Self::search_paths()
                .into_iter()
                .find(|p| p.exists())
                .ok_or_else(|| {
                    anyhow!(
                        "no configuration file found (searched ./{CONFIG_FILE}, \
                         ~/.config/{CONFIG_FILE}, /etc/broom/{CONFIG_FILE})"
                    )
                })?,
        };

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        config.check_api_version()?;
        config.loaded_from = Some(path);

        Ok(config)
    }

    /// Reject files written for an older schema major version. A newer major
    /// is accepted as-is; unknown fields are already ignored by the parser.
    pub fn check_api_version(&self) -> Result<()> {
        let stripped = self.api_version.trim_start_matches('v');
        let major: u64 = stripped
            .split('.')
            .next()
            .unwrap_or("")
            .parse()
            .with_context(|| format!("invalid api_version '{}'", self.api_version))?;

        if major < API_MAJOR {
            bail!(
                "configuration is outdated (api_version '{}', this binary supports v{}.x); \
                 please update your rule file",
                self.api_version,
                API_MAJOR
            );
        }
        Ok(())
    }
}
