// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use de_ai_agent::{MessageSanitizer, SanitizeOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, bool, bool)| {
    let (raw, keep_coauthor, keep_branding) = data;
    let options = SanitizeOptions {
        keep_coauthor,
        keep_branding,
    };
    let result = MessageSanitizer::sanitize(raw, &options);

    if options.keeps_everything() {
        assert_eq!(result.message, raw);
    } else {
        assert!(result.message.is_empty() || result.message.ends_with('\n'));
        assert!(!result.message.contains("\n\n\n"));
    }
});
