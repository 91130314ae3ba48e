//! Binding rules onto settings.
//!
//! Rules are consumed in rule-file order. Each rule either binds to its target setting and is
//! evaluated on the spot, or is skipped for one of the reasons counted in [`BindStats`].

use crate::evaluate::evaluate;
use crate::issues::{issue_for, IssueList};
use crate::model::SettingStore;
use crate::policy::AuditPolicy;
use crate::rule::Rule;
use crate::sanitize::normalize_key;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BindStats {
    pub rules_loaded: u32,
    pub bound: u32,
    /// Target key not present in the settings file.
    pub skipped_missing: u32,
    /// Mode condition did not match the store's restricted mode.
    pub skipped_mode: u32,
    /// Disabled or ignored by the tool configuration.
    pub skipped_ignored: u32,
    /// An earlier rule already bound the same setting.
    pub skipped_duplicate: u32,
}

#[derive(Clone, Debug, Default)]
pub struct BindOutcome {
    pub issues: IssueList,
    pub stats: BindStats,
}

pub fn bind_rules<I>(store: &mut SettingStore, rules: I, policy: &AuditPolicy) -> BindOutcome
where
    I: IntoIterator<Item = Rule>,
{
    let restricted_mode = store.restricted_mode();
    let source = store.source().map(str::to_string);
    let mut out = BindOutcome::default();

    for rule in rules {
        out.stats.rules_loaded += 1;
        let key = normalize_key(&rule.target_key);

        let Some(setting) = store.lookup_mut(&key) else {
            out.stats.skipped_missing += 1;
            debug!(key = %key, "no such setting; rule skipped");
            continue;
        };

        if policy.is_ignored(&key) {
            out.stats.skipped_ignored += 1;
            debug!(key = %key, "rule disabled by configuration");
            continue;
        }

        if setting.is_required() {
            out.stats.skipped_duplicate += 1;
            debug!(key = %key, "setting already bound by an earlier rule");
            continue;
        }

        if let Some(wanted) = rule.mode_condition
            && wanted != restricted_mode
        {
            out.stats.skipped_mode += 1;
            info!(
                key = %key,
                restricted_mode,
                rule_requires = wanted,
                "restricted mode does not match; rule skipped"
            );
            continue;
        }

        let severity = policy.severity_for(&key, rule.severity);
        setting.bind(&rule, severity);
        out.stats.bound += 1;

        if !evaluate(setting, policy.literal_match) {
            out.issues.push(issue_for(setting, source.as_deref()));
        }
    }

    out
}
