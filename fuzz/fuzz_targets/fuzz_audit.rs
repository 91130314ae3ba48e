//! Fuzz target for binding and evaluation with structured inputs.
//!
//! Checks that auditing never panics and that every issue refers to a setting that exists.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_audit
//! ```

#![no_main]

use arbitrary::Arbitrary;
use inicheck_domain::policy::AuditPolicy;
use inicheck_domain::{audit, RawSetting, Rule, SettingStore};
use inicheck_types::Severity;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzRule {
    key: String,
    expected: String,
    level: i64,
    mode: Option<bool>,
    message: String,
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    settings: Vec<(String, String)>,
    rules: Vec<FuzzRule>,
}

fuzz_target!(|input: FuzzInput| {
    let raw = input
        .settings
        .into_iter()
        .map(|(key, value)| RawSetting::new(key, value));
    let mut store = SettingStore::from_pairs(raw);

    let rules: Vec<Rule> = input
        .rules
        .into_iter()
        .map(|r| {
            let rule = Rule::new(r.key, r.expected, Severity::from_level(r.level))
                .with_message(r.message);
            match r.mode {
                Some(restricted) => rule.when_restricted(restricted),
                None => rule,
            }
        })
        .collect();
    let rule_count = rules.len() as u32;

    let report = audit(&mut store, rules, &AuditPolicy::default());
    assert!(report.stats.bound <= rule_count);
    for issue in report.issues.iter() {
        assert!(store.lookup(&issue.key).is_some());
    }
});
