// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::COAUTHOR_AGENT_NAMES;
use crate::services::sanitizer::{alternation, collapse_blank_runs, split_terminator};

static AI_COAUTHOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^Co-Authored-By:.*(?:{})",
        alternation(COAUTHOR_AGENT_NAMES)
    ))
    .unwrap()
});

/// Returns true if `line` (without terminator) is a co-author trailer naming an AI agent.
pub fn is_ai_coauthor(line: &str) -> bool {
    AI_COAUTHOR_REGEX.is_match(line)
}

/// Drop every `Co-Authored-By:` line that names an AI agent.
///
/// Matched lines go away together with their line terminator, so neighbouring
/// trailers stay contiguous. Returns the cleaned text and the removed lines
/// in order of appearance.
pub fn strip_coauthors(text: &str) -> (String, Vec<String>) {
    let mut cleaned = String::with_capacity(text.len());
    let mut removed = Vec::new();

    for line in text.split_inclusive('\n') {
        let (body, _) = split_terminator(line);
        if is_ai_coauthor(body) {
            removed.push(body.to_string());
        } else {
            cleaned.push_str(line);
        }
    }

    if !removed.is_empty() {
        debug!(count = removed.len(), "removed AI co-author trailers");
    }

    (collapse_blank_runs(&cleaned), removed)
}
