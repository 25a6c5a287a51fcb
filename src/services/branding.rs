// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::{BRANDING_EMOJI, BRANDING_TOOL_NAMES, LINK_LABELS};
use crate::services::sanitizer::{alternation, collapse_blank_runs, split_terminator};

// 🤖 Generated with [Claude Code](https://claude.com/claude-code)
static EMOJI_GENERATED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)(?:{})\u{{FE0F}}?\s*Generated with.*(?:{}).*",
        alternation(BRANDING_EMOJI),
        alternation(BRANDING_TOOL_NAMES)
    ))
    .unwrap()
});

// Generated with Claude
static PLAIN_GENERATED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)Generated with.*(?:{}).*",
        alternation(BRANDING_TOOL_NAMES)
    ))
    .unwrap()
});

// [Claude Code](https://...)
static AI_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\[(?:{})\]\([^)]*\)",
        alternation(LINK_LABELS)
    ))
    .unwrap()
});

/// Remove branding footers and AI tool links.
///
/// Three patterns run in order, each over the output of the previous one:
/// emoji-prefixed "Generated with" footers, plain "Generated with" footers,
/// then markdown links labelled with an AI tool name. Returns the cleaned
/// text and every removed span (all emoji matches first, then plain, then
/// links).
pub fn strip_branding(text: &str) -> (String, Vec<String>) {
    let mut removed = Vec::new();

    let cleaned = strip_spans(text, &EMOJI_GENERATED_REGEX, &mut removed);
    let cleaned = strip_spans(&cleaned, &PLAIN_GENERATED_REGEX, &mut removed);
    let cleaned = strip_spans(&cleaned, &AI_LINK_REGEX, &mut removed);

    if !removed.is_empty() {
        debug!(count = removed.len(), "removed branding spans");
    }

    (collapse_blank_runs(&cleaned), removed)
}

/// Cut every match of `pattern` out of each line. Matching never crosses a
/// line terminator. A line left blank by the cut is dropped entirely.
fn strip_spans(text: &str, pattern: &Regex, removed: &mut Vec<String>) -> String {
    let mut out = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        let (body, terminator) = split_terminator(line);

        let mut kept = String::new();
        let mut last = 0;
        let mut hit = false;
        for m in pattern.find_iter(body) {
            kept.push_str(&body[last..m.start()]);
            removed.push(m.as_str().to_string());
            last = m.end();
            hit = true;
        }

        if !hit {
            out.push_str(line);
            continue;
        }

        kept.push_str(&body[last..]);
        if kept.trim().is_empty() {
            continue;
        }
        out.push_str(&kept);
        out.push_str(terminator);
    }

    out
}
