//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - boolean interpretation of raw values
//! - sanitization never leaking markup or control characters
//! - message templating
//! - restricted-mode derivation and rule binding

use crate::bind::bind_rules;
use crate::evaluate::{evaluate, is_on};
use crate::model::{RawSetting, SettingStore};
use crate::policy::{AuditPolicy, LiteralMatch};
use crate::rule::{render_message, Rule};
use crate::sanitize::sanitize;
use inicheck_types::Severity;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Setting keys as they appear in php.ini files.
fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_.]{0,23}").unwrap()
}

/// Values that read as on, in arbitrary ASCII case.
fn arb_on_value() -> impl Strategy<Value = String> {
    prop_oneof![Just("on"), Just("true"), Just("1")].prop_flat_map(|word| {
        prop::collection::vec(any::<bool>(), word.len()).prop_map(move |upper| {
            word.chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect::<String>()
        })
    })
}

fn arb_expectation() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("true".to_string()),
        Just("false".to_string()),
        Just("non-blank".to_string()),
        Just(String::new()),
        ".{0,8}",
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn on_values_in_any_case_are_on(value in arb_on_value()) {
        prop_assert!(is_on(&value));
    }

    #[test]
    fn is_on_matches_definition(value in ".{0,8}") {
        let expected = value.eq_ignore_ascii_case("on")
            || value.eq_ignore_ascii_case("true")
            || value == "1";
        prop_assert_eq!(is_on(&value), expected);
    }

    #[test]
    fn sanitized_text_has_no_markup_or_controls(input in any::<String>()) {
        let out = sanitize(&input);
        for forbidden in ['<', '>', '"', '\'', '(', ')', '+', '-', '%', '\u{a0}'] {
            prop_assert!(!out.contains(forbidden), "{:?} leaked into {:?}", forbidden, out);
        }
        prop_assert!(!out.chars().any(char::is_control), "control leaked into {:?}", out);
    }

    #[test]
    fn ampersands_only_start_entities(input in any::<String>()) {
        let out = sanitize(&input);
        for (idx, _) in out.match_indices('&') {
            let tail = &out[idx..];
            let ok = tail.starts_with("&amp;")
                || tail.starts_with("&lt;")
                || tail.starts_with("&gt;")
                || tail.starts_with("&quot;")
                || tail.starts_with("&#");
            prop_assert!(ok, "bare ampersand in {:?}", out);
        }
    }

    #[test]
    fn template_matches_sequential_replace_for_plain_inputs(
        prefix in "[a-z ]{0,10}",
        middle in "[a-z ]{0,10}",
        name in "[a-z_]{1,10}",
        value in "[a-zA-Z0-9 ]{0,10}",
    ) {
        let template = format!("{prefix}$name${middle}$value$");
        let expected = template.replace("$name$", &name).replace("$value$", &value);
        prop_assert_eq!(render_message(&template, &name, &value), expected);
    }

    #[test]
    fn restricted_mode_reflects_last_entry(values in prop::collection::vec(".{0,4}", 1..6)) {
        let pairs = values.iter().map(|v| RawSetting::new("safe_mode", v.as_str()));
        let store = SettingStore::from_pairs(pairs);
        let last = values.last().map(|v| is_on(&sanitize(v))).unwrap_or(false);
        prop_assert_eq!(store.restricted_mode(), last);
        prop_assert_eq!(store.len(), 1);
    }

    #[test]
    fn absent_targets_never_produce_issues(
        present in arb_key(),
        targets in prop::collection::vec(arb_key(), 0..8),
        expected in arb_expectation(),
    ) {
        let mut store = SettingStore::from_pairs(vec![RawSetting::new(present.as_str(), "On")]);
        let rules: Vec<Rule> = targets
            .iter()
            .filter(|t| **t != present)
            .map(|t| Rule::new(t.as_str(), expected.as_str(), Severity::Error))
            .collect();
        let count = rules.len() as u32;

        let out = bind_rules(&mut store, rules, &AuditPolicy::default());

        prop_assert!(out.issues.is_empty());
        prop_assert_eq!(out.stats.skipped_missing, count);
        prop_assert_eq!(store.bound().count(), 0);
    }

    #[test]
    fn evaluation_is_stable_across_calls(
        key in arb_key(),
        value in ".{0,8}",
        expected in arb_expectation(),
    ) {
        let mut store = SettingStore::from_pairs(vec![RawSetting::new(key.as_str(), value.as_str())]);
        let out = bind_rules(
            &mut store,
            vec![Rule::new(key.as_str(), expected.as_str(), Severity::Warn)],
            &AuditPolicy::default(),
        );
        let setting = store.lookup(&crate::sanitize::normalize_key(&key)).expect("bound setting");
        let first = evaluate(setting, LiteralMatch::Exact);
        let second = evaluate(setting, LiteralMatch::Exact);
        prop_assert_eq!(first, second);
        prop_assert_eq!(out.issues.is_empty(), first);
    }
}
