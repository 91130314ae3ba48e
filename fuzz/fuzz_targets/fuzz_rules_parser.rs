//! Fuzz target for XML rule-file parsing.
//!
//! Goal: The parser should **never panic** on any input, including truncated or
//! deeply nested markup.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_rules_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = inicheck_parser::parse_rules(text);
    }
});
