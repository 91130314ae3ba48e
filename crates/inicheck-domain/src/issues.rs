use crate::model::Setting;
use inicheck_types::{Issue, Location, Severity, SeverityCounts};

/// Ordered, append-only collection of issues for one audit run.
///
/// At most one rule binds per setting, so there is nothing to deduplicate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IssueList {
    issues: Vec<Issue>,
}

impl IssueList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.issues.iter()
    }

    pub fn as_slice(&self) -> &[Issue] {
        &self.issues
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.iter().filter(|i| i.severity == severity).count()
    }

    pub fn filter_by_severity(&self, severity: Severity) -> Vec<&Issue> {
        self.iter().filter(|i| i.severity == severity).collect()
    }

    /// Warnings plus errors.
    pub fn headline_count(&self) -> usize {
        self.count_by_severity(Severity::Warn) + self.count_by_severity(Severity::Error)
    }

    pub fn counts(&self) -> SeverityCounts {
        SeverityCounts::from_issues(&self.issues)
    }

    pub fn into_vec(self) -> Vec<Issue> {
        self.issues
    }
}

impl IntoIterator for IssueList {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl<'a> IntoIterator for &'a IssueList {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

/// Snapshot a failing bound setting as a report issue.
pub(crate) fn issue_for(setting: &Setting, source: Option<&str>) -> Issue {
    Issue {
        severity: setting.severity(),
        key: setting.key().to_string(),
        message: setting.message().to_string(),
        expected: setting.expected().to_string(),
        value: setting.value().to_string(),
        location: source.map(|path| Location {
            path: path.to_string(),
            line: setting.line(),
        }),
    }
}
