// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use clap::Parser;

use crate::config::ReportMode;

#[derive(Parser, Debug)]
#[command(name = "de-ai-agent")]
#[command(version)]
#[command(about = "Remove AI attribution from git commit messages", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Path to commit message file (provided by git); reads stdin when omitted
    pub commit_msg_file: Option<PathBuf>,

    /// Keep Co-Authored-By lines with AI agent names
    #[arg(long)]
    pub keep_coauthor: bool,

    /// Keep "Generated with..." branding footers
    #[arg(long)]
    pub keep_branding: bool,

    /// Print the cleaned message to stdout instead of rewriting the file
    #[arg(long)]
    pub dry_run: bool,

    /// List every removed line on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// How to report removals on stderr (overrides --verbose)
    #[arg(long, value_enum)]
    pub report: Option<ReportMode>,

    /// Debug logging on stderr
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Create the user config file
    Init,
    /// Show effective configuration
    Config,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Manage the repository's commit-msg hook
    Hook {
        #[command(subcommand)]
        action: HookAction,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum HookAction {
    /// Install the commit-msg hook in the current repository
    Install {
        /// Installed hook keeps AI co-author trailers
        #[arg(long)]
        keep_coauthor: bool,

        /// Installed hook keeps branding footers
        #[arg(long)]
        keep_branding: bool,
    },
    /// Remove the hook and restore any backed-up hook
    Uninstall,
    /// Show whether the hook is installed
    Status,
}
