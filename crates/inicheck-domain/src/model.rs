use crate::evaluate::is_on;
use crate::rule::{render_message, Expectation, Rule};
use crate::sanitize::{normalize_key, sanitize};
use inicheck_types::{ids, Severity};
use std::collections::BTreeMap;
use tracing::debug;

/// One assignment as produced by a settings-file parser, before sanitization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawSetting {
    pub key: String,
    pub value: String,
    /// 1-based line of the assignment, when the parser knows it.
    pub line: Option<u32>,
}

impl RawSetting {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            line: None,
        }
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }
}

/// A normalized key/value pair, enriched with rule-derived fields once a rule binds to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Setting {
    key: String,
    value: String,
    line: Option<u32>,
    expected: Expectation,
    severity: Severity,
    message: String,
    required: bool,
}

impl Setting {
    pub fn new(key: &str, value: &str) -> Self {
        Self::from_raw(RawSetting::new(key, value))
    }

    fn from_raw(raw: RawSetting) -> Self {
        let value = sanitize(&raw.value);
        Self {
            key: normalize_key(&raw.key),
            expected: Expectation::Literal(value.clone()),
            value,
            line: raw.line,
            severity: Severity::Info,
            message: String::new(),
            required: false,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }

    pub fn expected(&self) -> &Expectation {
        &self.expected
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Rendered message (placeholders already substituted).
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True once a rule has bound to this setting.
    pub fn is_required(&self) -> bool {
        self.required
    }

    pub(crate) fn bind(&mut self, rule: &Rule, severity: Severity) {
        self.required = true;
        self.message = render_message(&rule.message_template, &self.key, &self.value);
        self.expected = Expectation::parse(&rule.expected_value);
        self.severity = severity;
    }
}

/// All settings parsed from one configuration file, in file order, unique by key.
#[derive(Clone, Debug, Default)]
pub struct SettingStore {
    settings: Vec<Setting>,
    index: BTreeMap<String, usize>,
    restricted_mode: bool,
    source: Option<String>,
}

impl SettingStore {
    /// Build a store using the default restricted-mode key (`safe_mode`).
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = RawSetting>,
    {
        Self::build(pairs, ids::DEFAULT_RESTRICTED_MODE_KEY)
    }

    /// Build a store, deriving restricted mode from `restricted_mode_key`.
    ///
    /// A repeated key replaces the earlier setting in place, so the position of the first
    /// occurrence and the content of the last one survive. Restricted mode follows the last
    /// occurrence of its key.
    pub fn build<I>(pairs: I, restricted_mode_key: &str) -> Self
    where
        I: IntoIterator<Item = RawSetting>,
    {
        let restricted_key = normalize_key(restricted_mode_key);
        let mut store = SettingStore::default();

        for raw in pairs {
            let setting = Setting::from_raw(raw);
            if setting.key == restricted_key {
                store.restricted_mode = is_on(&setting.value);
            }
            match store.index.get(&setting.key) {
                Some(&pos) => store.settings[pos] = setting,
                None => {
                    store.index.insert(setting.key.clone(), store.settings.len());
                    store.settings.push(setting);
                }
            }
        }

        debug!(
            settings = store.settings.len(),
            restricted_mode = store.restricted_mode,
            restricted_key = %restricted_key,
            "built setting store"
        );
        store
    }

    /// Label issue locations with the file the settings came from.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn restricted_mode(&self) -> bool {
        self.restricted_mode
    }

    /// Exact match on the normalized key.
    pub fn lookup(&self, key: &str) -> Option<&Setting> {
        self.index.get(key).map(|&pos| &self.settings[pos])
    }

    pub(crate) fn lookup_mut(&mut self, key: &str) -> Option<&mut Setting> {
        let pos = *self.index.get(key)?;
        self.settings.get_mut(pos)
    }

    pub fn all(&self) -> &[Setting] {
        &self.settings
    }

    /// Settings a rule has bound to, in file order.
    pub fn bound(&self) -> impl Iterator<Item = &Setting> {
        self.settings.iter().filter(|s| s.required)
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::store;

    #[test]
    fn keys_are_normalized_and_values_sanitized() {
        let store = SettingStore::from_pairs(vec![
            RawSetting::new("Display_Errors", "On"),
            RawSetting::new("error_reporting", "E_ALL & ~E_NOTICE"),
        ]);
        assert!(store.lookup("display_errors").is_some());
        assert!(store.lookup("Display_Errors").is_none());
        assert_eq!(
            store.lookup("error_reporting").map(Setting::value),
            Some("E_ALL &amp; ~E_NOTICE")
        );
    }

    #[test]
    fn defaults_before_binding() {
        let store = store(&[("expose_php", "On")]);
        let setting = store.lookup("expose_php").expect("setting");
        assert_eq!(setting.expected(), &Expectation::Literal("On".to_string()));
        assert_eq!(setting.severity(), Severity::Info);
        assert_eq!(setting.message(), "");
        assert!(!setting.is_required());
    }

    #[test]
    fn duplicate_keys_keep_first_position_and_last_value() {
        let store = store(&[("a", "1"), ("b", "2"), ("a", "3")]);
        assert_eq!(store.len(), 2);
        let keys: Vec<&str> = store.all().iter().map(Setting::key).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(store.lookup("a").map(Setting::value), Some("3"));
    }

    #[test]
    fn restricted_mode_follows_last_occurrence() {
        let off_last = store(&[("safe_mode", "On"), ("safe_mode", "Off")]);
        assert!(!off_last.restricted_mode());

        let on_last = store(&[("safe_mode", "Off"), ("safe_mode", "1")]);
        assert!(on_last.restricted_mode());
    }

    #[test]
    fn restricted_mode_defaults_to_off() {
        assert!(!store(&[("display_errors", "On")]).restricted_mode());
        assert!(!SettingStore::default().restricted_mode());
    }

    #[test]
    fn restricted_mode_key_is_configurable() {
        let pairs = vec![
            RawSetting::new("safe_mode", "On"),
            RawSetting::new("Hardened", "true"),
        ];
        let store = SettingStore::build(pairs.clone(), "hardened");
        assert!(store.restricted_mode());

        let store = SettingStore::build(pairs, "missing");
        assert!(!store.restricted_mode());
    }

    #[test]
    fn line_numbers_survive_normalization() {
        let store = SettingStore::from_pairs(vec![RawSetting::new("expose_php", "On").at_line(12)]);
        assert_eq!(store.lookup("expose_php").and_then(Setting::line), Some(12));
    }
}
