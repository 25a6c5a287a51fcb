// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

//! End-to-end hook tests: `hook install` into a freshly initialized
//! repository, then real `git commit` runs through the installed hook.
//! Git and the binary share an isolated HOME so no user or system config
//! (global hooksPath, signing, ...) leaks in.

mod helpers;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use helpers::{CLAUDE_CODE_FOOTER, CLAUDE_COAUTHOR, polluted_message};

struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("home")).unwrap();
        Self { root }
    }

    fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    fn repo(&self) -> PathBuf {
        self.root.path().join("repo")
    }

    fn hook_path(&self) -> PathBuf {
        self.repo().join(".git").join("hooks").join("commit-msg")
    }

    /// PATH with the built binary first, so the hook script finds it.
    fn path_var(&self) -> OsString {
        let bin = assert_cmd::cargo::cargo_bin("de-ai-agent");
        let bin_dir = bin.parent().unwrap().to_path_buf();
        let existing = std::env::var_os("PATH").unwrap_or_default();
        let dirs = std::iter::once(bin_dir).chain(std::env::split_paths(&existing));
        std::env::join_paths(dirs).unwrap()
    }

    fn isolate(&self, cmd: &mut std::process::Command) {
        cmd.env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_CEILING_DIRECTORIES", self.root.path())
            .env("PATH", self.path_var())
            .env("NO_COLOR", "1")
            .env_remove("GIT_DIR")
            .env_remove("GIT_WORK_TREE")
            .env_remove("GIT_INDEX_FILE")
            .env_remove("RUST_LOG")
            .env_remove("DE_AI_AGENT_KEEP_COAUTHOR")
            .env_remove("DE_AI_AGENT_KEEP_BRANDING")
            .env_remove("DE_AI_AGENT_REPORT");
    }

    fn git(&self, dir: &Path, args: &[&str]) -> String {
        let mut cmd = std::process::Command::new("git");
        cmd.current_dir(dir).args(args);
        self.isolate(&mut cmd);
        let output = cmd.output().unwrap();
        assert!(
            output.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap()
    }

    fn init_repo(&self) {
        fs::create_dir_all(self.repo()).unwrap();
        let repo = self.repo();
        self.git(&repo, &["init", "-q"]);
        self.git(&repo, &["config", "user.email", "test@example.com"]);
        self.git(&repo, &["config", "user.name", "Test User"]);
        self.git(&repo, &["config", "--local", "core.hooksPath", ".git/hooks"]);
        self.git(&repo, &["config", "--local", "commit.gpgsign", "false"]);
    }

    fn de_ai_agent(&self, dir: &Path) -> Command {
        let mut std_cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin("de-ai-agent"));
        std_cmd.current_dir(dir);
        self.isolate(&mut std_cmd);
        Command::from_std(std_cmd)
    }

    /// Commit `message` verbatim (no git cleanup) and return the stored message.
    fn commit(&self, message: &str) -> String {
        let msg_file = self.root.path().join("MESSAGE");
        fs::write(&msg_file, message).unwrap();
        let msg_arg = msg_file.to_string_lossy().into_owned();
        let repo = self.repo();
        self.git(
            &repo,
            &["commit", "-q", "--allow-empty", "--cleanup=verbatim", "-F", &msg_arg],
        );
        self.git(&repo, &["log", "-1", "--format=%B"])
    }
}

// ─── Install + commit ────────────────────────────────────────────────────────

#[test]
fn installed_hook_strips_attribution_from_commit() {
    let sandbox = Sandbox::new();
    sandbox.init_repo();

    sandbox
        .de_ai_agent(&sandbox.repo())
        .args(["hook", "install"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Hook installed"));
    assert!(sandbox.hook_path().exists());

    let stored = sandbox.commit(&polluted_message("Implement feature"));
    assert_eq!(stored.trim_end(), "Implement feature");
}

#[test]
fn installed_hook_keeps_human_coauthors() {
    let sandbox = Sandbox::new();
    sandbox.init_repo();
    sandbox
        .de_ai_agent(&sandbox.repo())
        .args(["hook", "install"])
        .assert()
        .success();

    let stored = sandbox.commit(&format!(
        "Implement feature\n\n\
         Co-Authored-By: Alice <alice@example.com>\n\
         {CLAUDE_COAUTHOR}\n\
         Co-Authored-By: Bob <bob@example.com>\n"
    ));
    assert!(stored.contains("Co-Authored-By: Alice <alice@example.com>"));
    assert!(stored.contains("Co-Authored-By: Bob <bob@example.com>"));
    assert!(!stored.contains("Claude Sonnet"));
}

#[test]
fn hook_installed_with_keep_coauthor_only_strips_branding() {
    let sandbox = Sandbox::new();
    sandbox.init_repo();
    sandbox
        .de_ai_agent(&sandbox.repo())
        .args(["hook", "install", "--keep-coauthor"])
        .assert()
        .success();

    let stored = sandbox.commit(&polluted_message("Fix bug"));
    assert!(stored.contains(CLAUDE_COAUTHOR));
    assert!(!stored.contains(CLAUDE_CODE_FOOTER));
    assert!(!stored.contains("Generated with"));
}

#[test]
fn install_from_subdirectory_targets_repository_hooks() {
    let sandbox = Sandbox::new();
    sandbox.init_repo();
    let nested = sandbox.repo().join("src").join("deep");
    fs::create_dir_all(&nested).unwrap();

    sandbox
        .de_ai_agent(&nested)
        .args(["hook", "install"])
        .assert()
        .success();

    assert!(sandbox.hook_path().exists());
    assert!(!nested.join(".git").exists());
}

// ─── Status / uninstall ──────────────────────────────────────────────────────

#[test]
fn status_install_uninstall_cycle() {
    let sandbox = Sandbox::new();
    sandbox.init_repo();
    let repo = sandbox.repo();

    sandbox
        .de_ai_agent(&repo)
        .args(["hook", "status"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No commit-msg hook installed"));

    sandbox
        .de_ai_agent(&repo)
        .args(["hook", "install"])
        .assert()
        .success();

    sandbox
        .de_ai_agent(&repo)
        .args(["hook", "status"])
        .assert()
        .success()
        .stderr(predicate::str::contains("hook is installed"));

    sandbox
        .de_ai_agent(&repo)
        .args(["hook", "install"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Hook already installed"));

    sandbox
        .de_ai_agent(&repo)
        .args(["hook", "uninstall"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Hook removed"));
    assert!(!sandbox.hook_path().exists());

    // With the hook gone, commits keep their attribution
    let stored = sandbox.commit(&polluted_message("Fix bug"));
    assert!(stored.contains(CLAUDE_COAUTHOR));

    sandbox
        .de_ai_agent(&repo)
        .args(["hook", "uninstall"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No hook found"));
}

#[test]
fn uninstall_refuses_foreign_hook() {
    let sandbox = Sandbox::new();
    sandbox.init_repo();
    fs::create_dir_all(sandbox.hook_path().parent().unwrap()).unwrap();
    fs::write(sandbox.hook_path(), "#!/bin/sh\nexit 0\n").unwrap();

    sandbox
        .de_ai_agent(&sandbox.repo())
        .args(["hook", "uninstall"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("was not installed by de-ai-agent"));
    assert!(sandbox.hook_path().exists());
}

// ─── Outside a repository ────────────────────────────────────────────────────

#[test]
fn hook_install_outside_repository_fails() {
    let sandbox = Sandbox::new();
    let outside = sandbox.root.path().join("outside");
    fs::create_dir_all(&outside).unwrap();

    sandbox
        .de_ai_agent(&outside)
        .args(["hook", "install"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Not a git repository"));
    assert!(!outside.join(".git").exists());
}

#[test]
fn hook_status_outside_repository_fails() {
    let sandbox = Sandbox::new();
    let outside = sandbox.root.path().join("outside");
    fs::create_dir_all(&outside).unwrap();

    sandbox
        .de_ai_agent(&outside)
        .args(["hook", "status"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Not a git repository"));
}
