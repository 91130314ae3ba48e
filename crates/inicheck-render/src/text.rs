use crate::RenderableReport;

/// Plain terminal report.
///
/// ```text
/// Scanned file php.ini (1024bytes)
/// Issues found: 1
///  * WARN (display_errors): display_errors should be off
/// ```
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Scanned file {} ({}bytes)\n",
        report.data.file, report.data.file_size
    ));
    out.push_str(&format!("Issues found: {}\n", report.headline_count()));

    for issue in &report.issues {
        out.push_str(&format!(
            " * {} ({}): {}\n",
            issue.severity.label(),
            issue.key,
            issue.message
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{issue, report};
    use crate::{RenderableSeverity, RenderableVerdictStatus};

    #[test]
    fn renders_header_and_issue_lines_in_order() {
        let report = report(
            RenderableVerdictStatus::Warn,
            vec![
                issue(RenderableSeverity::Warn, "display_errors", "display_errors should be off"),
                issue(RenderableSeverity::Info, "include_path", "Include path is .:/usr/share/php"),
                issue(RenderableSeverity::Error, "allow_url_include", "remote includes allowed"),
            ],
        );

        assert_eq!(
            render_text(&report),
            "Scanned file php.ini (120bytes)\n\
             Issues found: 2\n \
             * WARN (display_errors): display_errors should be off\n \
             * INFO (include_path): Include path is .:/usr/share/php\n \
             * ERROR (allow_url_include): remote includes allowed\n"
        );
    }

    #[test]
    fn clean_report_has_zero_issues() {
        let text = render_text(&report(RenderableVerdictStatus::Pass, Vec::new()));
        assert_eq!(text, "Scanned file php.ini (120bytes)\nIssues found: 0\n");
    }

    #[test]
    fn info_only_report_lists_but_does_not_count() {
        let text = render_text(&report(
            RenderableVerdictStatus::Pass,
            vec![issue(RenderableSeverity::Info, "extension", "Extension gd is loaded")],
        ));
        assert!(text.contains("Issues found: 0\n"));
        assert!(text.contains(" * INFO (extension): Extension gd is loaded\n"));
    }
}
