// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Commit message file not found: {}", .path.display())]
    #[diagnostic(
        code(de_ai_agent::input::not_found),
        help("git passes the message file as the first hook argument; omit it to read stdin")
    )]
    MessageFileNotFound { path: PathBuf },

    #[error("Not a git repository")]
    #[diagnostic(
        code(de_ai_agent::git::not_repo),
        help("Run this command inside a git repository")
    )]
    NotAGitRepo,

    #[error("Git error: {0}")]
    #[diagnostic(code(de_ai_agent::git::error))]
    Git(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(de_ai_agent::config::error))]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
