// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

pub mod branding;
pub mod coauthor;
pub mod hook;
pub mod reporter;
pub mod sanitizer;
