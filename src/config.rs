// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::domain::SanitizeOptions;
use crate::error::{Error, Result};

pub const PROJECT_CONFIG_FILE: &str = ".de-ai-agent.toml";

/// How removals are reported on stderr
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Print nothing
    Off,
    /// One line naming the categories that had removals
    #[default]
    Summary,
    /// Every removed line or span
    Verbose,
    /// The removal record as JSON
    Json,
}

impl std::fmt::Display for ReportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Summary => write!(f, "summary"),
            Self::Verbose => write!(f, "verbose"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Keep `Co-Authored-By:` trailers that name AI agents
    #[serde(default)]
    pub keep_coauthor: bool,

    /// Keep "Generated with" footers and AI tool links
    #[serde(default)]
    pub keep_branding: bool,

    #[serde(default)]
    pub report: ReportMode,
}

impl Config {
    /// Load with priority: CLI > ENV > user config > project config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.de-ai-agent.toml in the working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(PROJECT_CONFIG_FILE);
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        // User-level config
        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // Environment variables (DE_AI_AGENT_KEEP_BRANDING, DE_AI_AGENT_REPORT, ...)
        figment = figment.merge(Env::prefixed("DE_AI_AGENT_").split("__"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.apply_cli(cli);
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "de-ai-agent").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    pub fn sanitize_options(&self) -> SanitizeOptions {
        SanitizeOptions {
            keep_coauthor: self.keep_coauthor,
            keep_branding: self.keep_branding,
        }
    }

    fn apply_cli(&mut self, cli: &Cli) {
        // Flags can only switch a keep option on
        if cli.keep_coauthor {
            self.keep_coauthor = true;
        }
        if cli.keep_branding {
            self.keep_branding = true;
        }
        if let Some(mode) = cli.report {
            self.report = mode;
        } else if cli.verbose {
            self.report = ReportMode::Verbose;
        }
    }

    /// Create default user config file
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        if path.exists() {
            return Err(Error::Config(format!(
                "config file already exists, edit it directly: {}",
                path.display()
            )));
        }

        let content = r#"# de-ai-agent configuration
#
# A .de-ai-agent.toml in the repository root is read first; this file
# overrides it. DE_AI_AGENT_* environment variables and command-line
# flags override both.

# Keep Co-Authored-By trailers that name AI agents (Claude, GPT, Copilot, ...)
keep_coauthor = false

# Keep "Generated with ..." footers and [Claude Code](...) style links
keep_branding = false

# Report removals on stderr: off, summary, verbose, json
report = "summary"
"#;

        fs::write(&path, content)?;
        Ok(path)
    }
}
