// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::io::{self, Read, Write};
use std::path::Path;

use console::style;
use tracing::debug;

use crate::cli::{Cli, Commands, HookAction};
use crate::config::Config;
use crate::domain::SanitizeOptions;
use crate::error::{Error, Result};
use crate::services::{
    hook::{HookService, HookState, InstallOutcome, UninstallOutcome},
    reporter::Reporter,
    sanitizer::MessageSanitizer,
};

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        debug!(
            keep_coauthor = config.keep_coauthor,
            keep_branding = config.keep_branding,
            report = %config.report,
            "config loaded"
        );
        Ok(Self { cli, config })
    }

    pub fn run(&self) -> Result<()> {
        if let Some(ref cmd) = self.cli.command {
            return self.handle_command(cmd);
        }

        match self.cli.commit_msg_file.as_deref() {
            Some(path) => self.filter_file(path),
            None => self.filter_stdin(),
        }
    }

    // ─── Message Filtering ───

    fn filter_stdin(&self) -> Result<()> {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw)?;
        debug!(bytes = raw.len(), "read message from stdin");

        let cleaned = self.sanitize(&raw)?;

        let mut stdout = io::stdout().lock();
        stdout.write_all(cleaned.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn filter_file(&self, path: &Path) -> Result<()> {
        let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::MessageFileNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;
        debug!(path = %path.display(), bytes = raw.len(), "read message file");

        let cleaned = self.sanitize(&raw)?;

        if self.cli.dry_run {
            let mut stdout = io::stdout().lock();
            stdout.write_all(cleaned.as_bytes())?;
            stdout.flush()?;
        } else if cleaned != raw {
            std::fs::write(path, &cleaned)?;
            debug!(path = %path.display(), "message file rewritten");
        }

        Ok(())
    }

    /// Sanitize and report removals on stderr.
    fn sanitize(&self, raw: &str) -> Result<String> {
        let options = self.config.sanitize_options();
        let sanitized = MessageSanitizer::sanitize(raw, &options);
        Reporter::emit(&sanitized.removed, self.config.report)?;
        Ok(sanitized.message)
    }

    // ─── Subcommands ───

    fn handle_command(&self, cmd: &Commands) -> Result<()> {
        match cmd {
            Commands::Init => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Commands::Config => {
                println!("keep_coauthor: {}", self.config.keep_coauthor);
                println!("keep_branding: {}", self.config.keep_branding);
                println!("report: {}", self.config.report);
                if let Some(ref path) = Config::config_path() {
                    let status = if path.exists() { "found" } else { "not found" };
                    println!("config file: {} ({})", path.display(), status);
                }
                Ok(())
            }
            Commands::Completions { shell } => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(*shell, &mut cmd, "de-ai-agent", &mut io::stdout());
                Ok(())
            }
            Commands::Hook { action } => self.handle_hook(action),
        }
    }

    // ─── Hook Commands ───

    fn handle_hook(&self, action: &HookAction) -> Result<()> {
        let hooks = HookService::discover()?;
        match action {
            HookAction::Install {
                keep_coauthor,
                keep_branding,
            } => {
                let options = SanitizeOptions {
                    keep_coauthor: *keep_coauthor,
                    keep_branding: *keep_branding,
                };
                Self::hook_install(&hooks, &options)
            }
            HookAction::Uninstall => Self::hook_uninstall(&hooks),
            HookAction::Status => {
                Self::hook_status(&hooks);
                Ok(())
            }
        }
    }

    fn hook_install(hooks: &HookService, options: &SanitizeOptions) -> Result<()> {
        let hook_path = hooks.hook_path();
        match hooks.install(options)? {
            InstallOutcome::AlreadyInstalled => {
                Self::print_success(&format!("Hook already installed at {}", hook_path.display()));
            }
            InstallOutcome::Updated => {
                Self::print_success(&format!("Hook updated at {}", hook_path.display()));
            }
            InstallOutcome::Installed { backup } => {
                if let Some(backup) = backup {
                    Self::print_info(&format!(
                        "Backed up existing hook to {}",
                        backup.display()
                    ));
                }
                Self::print_success(&format!("Hook installed at {}", hook_path.display()));
            }
        }
        Ok(())
    }

    fn hook_uninstall(hooks: &HookService) -> Result<()> {
        let hook_path = hooks.hook_path();
        match hooks.uninstall()? {
            UninstallOutcome::NotFound => {
                Self::print_info(&format!("No hook found at {}", hook_path.display()));
            }
            UninstallOutcome::Removed { restored_backup } => {
                if restored_backup {
                    Self::print_info("Restored previous hook from backup");
                }
                Self::print_success(&format!("Hook removed from {}", hook_path.display()));
            }
        }
        Ok(())
    }

    fn hook_status(hooks: &HookService) {
        let hook_path = hooks.hook_path();
        match hooks.state() {
            HookState::Installed => {
                Self::print_success(&format!(
                    "de-ai-agent hook is installed at {}",
                    hook_path.display()
                ));
            }
            HookState::Foreign => {
                Self::print_info(
                    "A commit-msg hook exists but was not installed by de-ai-agent",
                );
            }
            HookState::Missing => {
                eprintln!("{} No commit-msg hook installed", style("✗").red().bold());
                eprintln!(
                    "  Install with: {}",
                    style("de-ai-agent hook install").yellow()
                );
            }
        }
    }

    // ─── Output Helpers ───

    fn print_success(msg: &str) {
        eprintln!("{} {}", style("✓").green().bold(), msg);
    }

    fn print_info(msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }
}
