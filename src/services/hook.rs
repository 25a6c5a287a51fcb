// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::domain::SanitizeOptions;
use crate::error::{Error, Result};

pub const HOOK_NAME: &str = "commit-msg";
pub const HOOK_MARKER: &str = "# de-ai-agent hook";
const BACKUP_NAME: &str = "commit-msg.de-ai-agent-backup";
const TEMP_NAME: &str = ".commit-msg.de-ai-agent.tmp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookState {
    Missing,
    Installed,
    /// A commit-msg hook exists but was not written by us
    Foreign,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed { backup: Option<PathBuf> },
    Updated,
    AlreadyInstalled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UninstallOutcome {
    NotFound,
    Removed { restored_backup: bool },
}

/// Render the commit-msg hook script for the given options.
pub fn hook_script(options: &SanitizeOptions) -> String {
    let mut args = String::new();
    if options.keep_coauthor {
        args.push_str(" --keep-coauthor");
    }
    if options.keep_branding {
        args.push_str(" --keep-branding");
    }

    format!(
        r#"#!/bin/sh
{HOOK_MARKER} (auto-generated, do not edit)
# Strips AI co-author trailers and branding footers from the commit message.

# Only run if de-ai-agent is available
if ! command -v de-ai-agent >/dev/null 2>&1; then
    exit 0
fi

exec de-ai-agent{args} "$1"
"#
    )
}

pub struct HookService {
    hooks_dir: PathBuf,
}

impl HookService {
    pub fn new(hooks_dir: impl Into<PathBuf>) -> Self {
        Self {
            hooks_dir: hooks_dir.into(),
        }
    }

    /// Locate the hooks directory of the repository containing the working directory.
    pub fn discover() -> Result<Self> {
        let output = Command::new("git")
            .args(["rev-parse", "--git-path", "hooks"])
            .output()?;

        if !output.status.success() {
            return Err(Error::NotAGitRepo);
        }

        let dir = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if dir.is_empty() {
            return Err(Error::Git("git did not report a hooks directory".into()));
        }
        debug!(hooks_dir = %dir, "hooks directory resolved");
        Ok(Self::new(dir))
    }

    pub fn hooks_dir(&self) -> &Path {
        &self.hooks_dir
    }

    pub fn hook_path(&self) -> PathBuf {
        self.hooks_dir.join(HOOK_NAME)
    }

    pub fn backup_path(&self) -> PathBuf {
        self.hooks_dir.join(BACKUP_NAME)
    }

    /// Backups in the order they were taken: `BACKUP_NAME`, then `BACKUP_NAME.1`, `.2`, ...
    fn backup_path_at(&self, index: usize) -> PathBuf {
        match index {
            0 => self.backup_path(),
            n => self.hooks_dir.join(format!("{BACKUP_NAME}.{n}")),
        }
    }

    /// The most recent backup, i.e. the hook that was active before our last install.
    pub fn latest_backup(&self) -> Option<PathBuf> {
        (0..)
            .map(|i| self.backup_path_at(i))
            .take_while(|p| p.exists())
            .last()
    }

    /// First unused backup name; earlier backups are never overwritten.
    fn next_backup_path(&self) -> PathBuf {
        (0..)
            .map(|i| self.backup_path_at(i))
            .find(|p| !p.exists())
            .unwrap_or_else(|| self.backup_path())
    }

    pub fn state(&self) -> HookState {
        let path = self.hook_path();
        if !path.exists() {
            return HookState::Missing;
        }
        let content = fs::read_to_string(&path).unwrap_or_default();
        if content.contains(HOOK_MARKER) {
            HookState::Installed
        } else {
            HookState::Foreign
        }
    }

    pub fn install(&self, options: &SanitizeOptions) -> Result<InstallOutcome> {
        let hook_path = self.hook_path();
        let script = hook_script(options);

        fs::create_dir_all(&self.hooks_dir)?;

        let mut backup = None;
        let mut updating = false;
        match self.state() {
            HookState::Installed => {
                let current = fs::read_to_string(&hook_path)?;
                if current == script {
                    return Ok(InstallOutcome::AlreadyInstalled);
                }
                updating = true;
            }
            HookState::Foreign => {
                let backup_path = self.next_backup_path();
                fs::copy(&hook_path, &backup_path)?;
                debug!(backup = %backup_path.display(), "existing hook backed up");
                backup = Some(backup_path);
            }
            HookState::Missing => {}
        }

        // Write to temp file first, then rename (atomic)
        let temp_path = self.hooks_dir.join(TEMP_NAME);
        fs::write(&temp_path, &script)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&temp_path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&temp_path, perms)?;
        }

        fs::rename(&temp_path, &hook_path)?;

        if updating {
            Ok(InstallOutcome::Updated)
        } else {
            Ok(InstallOutcome::Installed { backup })
        }
    }

    pub fn uninstall(&self) -> Result<UninstallOutcome> {
        let hook_path = self.hook_path();

        match self.state() {
            HookState::Missing => return Ok(UninstallOutcome::NotFound),
            HookState::Foreign => {
                return Err(Error::Git(format!(
                    "hook was not installed by de-ai-agent, remove it manually if intended: {}",
                    hook_path.display()
                )));
            }
            HookState::Installed => {}
        }

        fs::remove_file(&hook_path)?;

        let latest = self.latest_backup();
        let restored_backup = latest.is_some();
        if let Some(backup_path) = latest {
            fs::rename(&backup_path, &hook_path)?;
        }

        Ok(UninstallOutcome::Removed { restored_backup })
    }
}
