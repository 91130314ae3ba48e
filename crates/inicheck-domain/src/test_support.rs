use crate::model::{RawSetting, Setting, SettingStore};
use crate::rule::Rule;
use inicheck_types::Severity;

pub fn store(pairs: &[(&str, &str)]) -> SettingStore {
    SettingStore::from_pairs(pairs.iter().map(|(k, v)| RawSetting::new(*k, *v)))
}

pub fn rule(key: &str, expected: &str, severity: Severity, message: &str) -> Rule {
    Rule::new(key, expected, severity).with_message(message)
}

/// A setting with `expected` already bound, for evaluator tests.
pub fn bound_setting(key: &str, value: &str, expected: &str) -> Setting {
    let mut setting = Setting::new(key, value);
    setting.bind(&rule(key, expected, Severity::Warn, ""), Severity::Warn);
    setting
}
