// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalCategory {
    Coauthor,
    Branding,
}

impl RemovalCategory {
    /// Fixed reporting order.
    pub const ALL: [RemovalCategory; 2] = [Self::Coauthor, Self::Branding];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coauthor => "coauthor",
            Self::Branding => "branding",
        }
    }

    /// Human-readable noun, singular or plural by count.
    pub fn noun(&self, count: usize) -> &'static str {
        match (self, count) {
            (Self::Coauthor, 1) => "co-author trailer",
            (Self::Coauthor, _) => "co-author trailers",
            (Self::Branding, 1) => "branding footer",
            (Self::Branding, _) => "branding footers",
        }
    }
}

impl std::fmt::Display for RemovalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literal text removed from a message, per category, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemovalRecord {
    pub coauthor: Vec<String>,
    pub branding: Vec<String>,
}

impl RemovalRecord {
    pub fn get(&self, category: RemovalCategory) -> &[String] {
        match category {
            RemovalCategory::Coauthor => &self.coauthor,
            RemovalCategory::Branding => &self.branding,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.coauthor.is_empty() && self.branding.is_empty()
    }

    pub fn total(&self) -> usize {
        self.coauthor.len() + self.branding.len()
    }

    /// Categories that had at least one removal, in reporting order.
    pub fn categories(&self) -> impl Iterator<Item = RemovalCategory> + '_ {
        RemovalCategory::ALL
            .into_iter()
            .filter(|c| !self.get(*c).is_empty())
    }
}

/// Result of running the sanitizer over one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    pub message: String,
    pub removed: RemovalRecord,
}
