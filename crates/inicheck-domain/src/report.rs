use crate::bind::BindStats;
use crate::issues::IssueList;
use inicheck_types::{SeverityCounts, Verdict};

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub issues: IssueList,
    pub counts: SeverityCounts,
    pub stats: BindStats,
    pub restricted_mode: bool,
    pub settings_scanned: u32,
}
