use crate::bind::{bind_rules, BindOutcome};
use crate::model::SettingStore;
use crate::policy::AuditPolicy;
use crate::report::DomainReport;
use crate::rule::Rule;
use inicheck_types::{SeverityCounts, Verdict};

/// Bind and evaluate `rules` against `store`, in rule order.
pub fn audit<I>(store: &mut SettingStore, rules: I, policy: &AuditPolicy) -> DomainReport
where
    I: IntoIterator<Item = Rule>,
{
    let BindOutcome { issues, stats } = bind_rules(store, rules, policy);
    let counts = issues.counts();

    DomainReport {
        verdict: compute_verdict(&counts),
        issues,
        counts,
        stats,
        restricted_mode: store.restricted_mode(),
        settings_scanned: u32::try_from(store.len()).unwrap_or(u32::MAX),
    }
}

fn compute_verdict(counts: &SeverityCounts) -> Verdict {
    if counts.error > 0 {
        Verdict::Fail
    } else if counts.warn > 0 {
        Verdict::Warn
    } else {
        Verdict::Pass
    }
}
