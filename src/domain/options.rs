// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

/// Toggles for the two removal passes. Both passes run by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanitizeOptions {
    /// Skip removal of AI `Co-Authored-By:` trailers
    pub keep_coauthor: bool,

    /// Skip removal of "Generated with" footers and AI tool links
    pub keep_branding: bool,
}

impl SanitizeOptions {
    /// True when neither pass will run and the message passes through verbatim.
    pub fn keeps_everything(&self) -> bool {
        self.keep_coauthor && self.keep_branding
    }
}
