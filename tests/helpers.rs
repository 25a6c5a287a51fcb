// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#[allow(dead_code)]
pub const CLAUDE_COAUTHOR: &str = "Co-Authored-By: Claude Sonnet 4.5 <noreply@anthropic.com>";
#[allow(dead_code)]
pub const CLAUDE_CODE_FOOTER: &str =
    "\u{1F916} Generated with [Claude Code](https://claude.com/claude-code)";

/// Subject, AI co-author trailer and Claude Code footer, the way the tool writes them.
#[allow(dead_code)]
pub fn polluted_message(subject: &str) -> String {
    format!("{subject}\n\n{CLAUDE_COAUTHOR}\n{CLAUDE_CODE_FOOTER}\n")
}
