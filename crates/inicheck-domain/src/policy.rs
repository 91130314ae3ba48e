use globset::GlobSet;
use inicheck_types::{ids, Severity};
use std::collections::BTreeMap;

/// How literal (non-sentinel) expectations are compared against values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LiteralMatch {
    #[default]
    Exact,
    IgnoreCase,
}

/// Which issues make the run fail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailOn {
    /// Issues never change the exit status.
    #[default]
    Never,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RulePolicy {
    pub enabled: bool,
    /// Replaces the rule file's `LEVEL` when set.
    pub severity: Option<Severity>,
}

impl RulePolicy {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            severity: None,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            severity: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AuditPolicy {
    pub restricted_mode_key: String,
    pub literal_match: LiteralMatch,
    pub fail_on: FailOn,
    /// Setting keys whose rules are skipped (compiled by the settings crate).
    pub ignore: Option<GlobSet>,
    /// Per-key overrides, keyed by normalized setting key.
    pub rules: BTreeMap<String, RulePolicy>,
}

impl Default for AuditPolicy {
    fn default() -> Self {
        Self {
            restricted_mode_key: ids::DEFAULT_RESTRICTED_MODE_KEY.to_string(),
            literal_match: LiteralMatch::default(),
            fail_on: FailOn::default(),
            ignore: None,
            rules: BTreeMap::new(),
        }
    }
}

impl AuditPolicy {
    pub fn rule_policy(&self, key: &str) -> Option<&RulePolicy> {
        self.rules.get(key)
    }

    pub fn is_ignored(&self, key: &str) -> bool {
        let globbed = self.ignore.as_ref().is_some_and(|set| set.is_match(key));
        globbed || self.rule_policy(key).is_some_and(|p| !p.enabled)
    }

    pub fn severity_for(&self, key: &str, declared: Severity) -> Severity {
        self.rule_policy(key)
            .and_then(|p| p.severity)
            .unwrap_or(declared)
    }
}
