//! Fuzz target for settings-file parsing.
//!
//! Goal: The parser should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_ini_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    if let Ok(settings) = inicheck_parser::parse_settings(&text) {
        // Whatever parses must also build a store.
        let store = inicheck_domain::SettingStore::from_pairs(settings);
        let _ = store.restricted_mode();
    }
});
