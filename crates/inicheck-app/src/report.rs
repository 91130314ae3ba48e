use anyhow::Context;
use inicheck_render::{
    RenderableData, RenderableIssue, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use inicheck_types::{InicheckReport, Issue, Severity, Verdict, SCHEMA_REPORT_V1};

/// Parse a saved JSON report. Only `inicheck.report.v1` is understood.
pub fn parse_report_json(text: &str) -> anyhow::Result<InicheckReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse inicheck v1 report")
}

pub fn serialize_report(report: &InicheckReport) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(report).context("serialize report")?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn to_renderable(report: &InicheckReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        issues: report.issues.iter().map(renderable_issue).collect(),
        data: RenderableData {
            file: report.data.file.clone(),
            file_size: report.data.file_size,
            rules_source: report.data.rules_source.clone(),
            restricted_mode: report.data.restricted_mode,
            settings_scanned: report.data.settings_scanned,
        },
    }
}

fn renderable_issue(issue: &Issue) -> RenderableIssue {
    RenderableIssue {
        severity: match issue.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warn => RenderableSeverity::Warn,
            Severity::Error => RenderableSeverity::Error,
        },
        key: issue.key.clone(),
        message: issue.message.clone(),
        expected: issue.expected.clone(),
        value: issue.value.clone(),
        location: issue.location.as_ref().map(|loc| RenderableLocation {
            path: loc.path.clone(),
            line: loc.line,
        }),
    }
}
