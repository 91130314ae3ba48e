use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for inicheck reports.
pub const SCHEMA_REPORT_V1: &str = "inicheck.report.v1";

/// Severity carried by a rule, copied onto its bound setting, and reported on the issue.
///
/// Rule files encode it as an integer `LEVEL`: 0 = info, 1 = warn, 2 = error.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Map a numeric rule level onto the scale. Anything above 2 saturates to `Error`,
    /// anything below 0 to `Info`.
    pub fn from_level(level: i64) -> Self {
        match level {
            i64::MIN..=0 => Severity::Info,
            1 => Severity::Warn,
            _ => Severity::Error,
        }
    }

    /// Upper-case label used by the text report (`INFO`, `WARN`, `ERROR`).
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

/// One reported finding: a bound setting whose evaluation failed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Issue {
    pub severity: Severity,
    pub key: String,
    pub message: String,

    /// Expectation the rule configured (`true`, `false`, `non-blank`, a literal, or empty).
    pub expected: String,
    /// Observed (sanitized) value.
    pub value: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SeverityCounts {
    pub info: u32,
    pub warn: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut counts = SeverityCounts::default();
        for issue in issues {
            match issue.severity {
                Severity::Info => counts.info += 1,
                Severity::Warn => counts.warn += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Inicheck-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct AuditData {
    /// Settings file as named on the command line.
    pub file: String,
    pub file_size: u64,
    /// Rule file path, or `builtin:php-ini` for the embedded rule set.
    pub rules_source: String,
    pub restricted_mode: bool,

    pub settings_scanned: u32,
    pub rules_loaded: u32,
    pub rules_bound: u32,

    pub rules_skipped_missing: u32,
    pub rules_skipped_mode: u32,
    pub rules_skipped_ignored: u32,
    pub rules_skipped_duplicate: u32,
}

/// A generic report envelope.
///
/// Generic over the data payload so the outer shape stays stable while the summary evolves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = AuditData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub counts: SeverityCounts,
    pub issues: Vec<Issue>,
    pub data: TData,
}

pub type InicheckReport = ReportEnvelope<AuditData>;
