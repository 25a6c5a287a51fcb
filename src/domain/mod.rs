// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

mod options;
mod removal;
mod vocabulary;

pub use options::*;
pub use removal::*;
pub use vocabulary::*;
