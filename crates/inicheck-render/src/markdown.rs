use crate::{RenderableReport, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# inicheck report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- File: `{}` ({} bytes, {} settings)\n- Rules: `{}`\n- Restricted mode: {}\n- Issues found: {}\n\n",
        verdict,
        report.data.file,
        report.data.file_size,
        report.data.settings_scanned,
        report.data.rules_source,
        if report.data.restricted_mode { "on" } else { "off" },
        report.headline_count(),
    ));

    if report.issues.is_empty() {
        out.push_str("No issues.\n");
        return out;
    }

    out.push_str("## Issues\n\n");
    out.push_str("| Level | Key | Message | Value | Expected | Line |\n");
    out.push_str("|---|---|---|---|---|---|\n");

    for issue in &report.issues {
        let line = issue
            .location
            .as_ref()
            .and_then(|l| l.line)
            .map(|l| l.to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "| {} | `{}` | {} | `{}` | `{}` | {} |\n",
            issue.severity.label(),
            issue.key,
            cell(&issue.message),
            cell(&issue.value),
            cell(&issue.expected),
            line
        ));
    }

    out
}

// Table cells cannot hold pipes or newlines.
fn cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{issue, report};
    use crate::{RenderableLocation, RenderableSeverity};

    #[test]
    fn renders_empty_report() {
        let md = render_markdown(&report(RenderableVerdictStatus::Pass, Vec::new()));
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("Issues found: 0"));
        assert!(md.contains("No issues."));
        assert!(!md.contains("## Issues"));
    }

    #[test]
    fn renders_issue_table_with_lines() {
        let mut with_line = issue(
            RenderableSeverity::Error,
            "allow_url_include",
            "remote includes | allowed",
        );
        with_line.location = Some(RenderableLocation {
            path: "php.ini".to_string(),
            line: Some(12),
        });
        let md = render_markdown(&report(
            RenderableVerdictStatus::Fail,
            vec![
                with_line,
                issue(RenderableSeverity::Info, "extension", "Extension gd"),
            ],
        ));

        assert!(md.contains("Verdict: **FAIL**"));
        assert!(md.contains("- File: `php.ini` (120 bytes, 4 settings)"));
        assert!(md.contains("- Rules: `rules.xml`"));
        assert!(md.contains("- Restricted mode: off"));
        assert!(md.contains("Issues found: 1"));
        assert!(md.contains(
            "| ERROR | `allow_url_include` | remote includes \\| allowed | `On` | `false` | 12 |"
        ));
        assert!(md.contains("| INFO | `extension` | Extension gd | `On` | `false` |  |"));
    }
}
