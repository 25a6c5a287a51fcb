// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

//! Fixed match vocabulary. Every token is matched case-insensitively as a
//! substring, so `Claude` also covers `Claude Sonnet 4.5` and `claude-code`.

/// Names that mark a `Co-Authored-By:` trailer as AI-authored.
pub const COAUTHOR_AGENT_NAMES: &[&str] = &[
    "Claude", "GPT", "Copilot", "Aider", "Gemini", "Cline", "Cody", "Windsurf",
];

/// Tool names that make a "Generated with" line a branding footer.
pub const BRANDING_TOOL_NAMES: &[&str] = &["Claude", "AI", "Copilot", "Cline", "Cursor", "Aider"];

/// Markdown link labels removed together with their URL. Compared against
/// the whole label, longest first so `Claude Code` wins over `Claude`.
pub const LINK_LABELS: &[&str] = &[
    "Claude Code",
    "Claude",
    "Copilot",
    "AI",
    "Cline",
    "Cursor",
    "Aider",
];

/// Robot, sparkles, rocket.
pub const BRANDING_EMOJI: &[&str] = &["\u{1F916}", "\u{2728}", "\u{1F680}"];
