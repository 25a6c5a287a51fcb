// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::{RemovalRecord, SanitizeOptions, Sanitized};
use crate::services::branding::strip_branding;
use crate::services::coauthor::strip_coauthors;

static BLANK_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

pub struct MessageSanitizer;

impl MessageSanitizer {
    /// Strip AI attribution from a commit message.
    ///
    /// Co-author trailers are removed first, then branding. With both passes
    /// skipped the input is returned verbatim. Otherwise the result is either
    /// empty or ends in exactly one newline.
    pub fn sanitize(raw: &str, options: &SanitizeOptions) -> Sanitized {
        if options.keeps_everything() {
            return Sanitized {
                message: raw.to_string(),
                removed: RemovalRecord::default(),
            };
        }

        let mut removed = RemovalRecord::default();
        let mut message = raw.to_string();

        if !options.keep_coauthor {
            let (cleaned, lines) = strip_coauthors(&message);
            message = cleaned;
            removed.coauthor = lines;
        }

        if !options.keep_branding {
            let (cleaned, spans) = strip_branding(&message);
            message = cleaned;
            removed.branding = spans;
        }

        let message = finalize(&message);
        debug!(
            removed = removed.total(),
            bytes_in = raw.len(),
            bytes_out = message.len(),
            "message sanitized"
        );

        Sanitized { message, removed }
    }
}

/// Collapse every run of three or more newlines down to a single blank line.
pub fn collapse_blank_runs(text: &str) -> String {
    BLANK_RUN_REGEX.replace_all(text, "\n\n").into_owned()
}

/// Trim trailing whitespace and terminate with one newline, or return an
/// empty string when nothing is left.
pub fn finalize(text: &str) -> String {
    let trimmed = text.trim_end();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}\n")
    }
}

/// Split a line produced by `split_inclusive('\n')` into body and terminator.
pub(crate) fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Build a regex alternation body from literal tokens.
pub(crate) fn alternation(tokens: &[&str]) -> String {
    tokens
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|")
}
