// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::io::Write;

use console::style;

use crate::config::ReportMode;
use crate::domain::RemovalRecord;
use crate::error::Result;

/// A rendered report line. Headings get a styled prefix when emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Heading(String),
    Item(String),
    Raw(String),
}

impl ReportLine {
    pub fn text(&self) -> &str {
        match self {
            Self::Heading(s) | Self::Item(s) | Self::Raw(s) => s,
        }
    }
}

pub struct Reporter;

impl Reporter {
    /// Render the removal record for the given mode. Never fails for text modes.
    pub fn render(record: &RemovalRecord, mode: ReportMode) -> Result<Vec<ReportLine>> {
        let lines = match mode {
            ReportMode::Off => Vec::new(),
            ReportMode::Json => vec![ReportLine::Raw(serde_json::to_string(record)?)],
            ReportMode::Summary => Self::summary(record).into_iter().collect(),
            ReportMode::Verbose => Self::listing(record),
        };
        Ok(lines)
    }

    /// Write the report to stderr.
    pub fn emit(record: &RemovalRecord, mode: ReportMode) -> Result<()> {
        let stderr = std::io::stderr();
        Self::emit_to(&mut stderr.lock(), record, mode)
    }

    pub fn emit_to<W: Write>(out: &mut W, record: &RemovalRecord, mode: ReportMode) -> Result<()> {
        for line in Self::render(record, mode)? {
            match line {
                ReportLine::Heading(text) => writeln!(out, "{} {}", style("info:").cyan(), text)?,
                ReportLine::Item(text) => writeln!(out, "  {} {}", style("-").dim(), text)?,
                ReportLine::Raw(text) => writeln!(out, "{text}")?,
            }
        }
        Ok(())
    }

    fn summary(record: &RemovalRecord) -> Option<ReportLine> {
        if record.is_empty() {
            return None;
        }

        let parts: Vec<String> = record
            .categories()
            .map(|c| {
                let n = record.get(c).len();
                format!("{} {}", n, c.noun(n))
            })
            .collect();

        Some(ReportLine::Heading(format!(
            "Removed AI attribution: {}",
            parts.join(", ")
        )))
    }

    fn listing(record: &RemovalRecord) -> Vec<ReportLine> {
        let mut lines = Vec::with_capacity(record.total() + 2);
        for category in record.categories() {
            let items = record.get(category);
            lines.push(ReportLine::Heading(format!(
                "Removed {} {}:",
                items.len(),
                category.noun(items.len())
            )));
            lines.extend(items.iter().cloned().map(ReportLine::Item));
        }
        lines
    }
}
