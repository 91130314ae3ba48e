use crate::{RenderableReport, RenderableSeverity};

/// Render issues as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line}::{message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for issue in &report.issues {
        let level = match issue.severity {
            RenderableSeverity::Error => "error",
            RenderableSeverity::Warn => "warning",
            RenderableSeverity::Info => "notice",
        };

        let mut meta = String::new();
        if let Some(loc) = &issue.location {
            meta.push_str(&format!("file={}", loc.path.as_str()));
            if let Some(line) = loc.line {
                meta.push_str(&format!(",line={}", line));
            }
        }

        let message = format!("[{}] {}", issue.key, issue.message)
            .replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A");

        if meta.is_empty() {
            out.push(format!("::{}::{}", level, message));
        } else {
            out.push(format!("::{} {}::{}", level, meta, message));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{issue, report};
    use crate::{RenderableLocation, RenderableVerdictStatus};

    #[test]
    fn maps_levels_and_locations() {
        let mut located = issue(RenderableSeverity::Warn, "display_errors", "shown to users");
        located.location = Some(RenderableLocation {
            path: "conf/php.ini".to_string(),
            line: Some(3),
        });
        let report = report(
            RenderableVerdictStatus::Fail,
            vec![
                located,
                issue(RenderableSeverity::Error, "allow_url_include", "remote"),
                issue(RenderableSeverity::Info, "extension", "loaded"),
            ],
        );

        assert_eq!(
            render_github_annotations(&report),
            vec![
                "::warning file=conf/php.ini,line=3::[display_errors] shown to users".to_string(),
                "::error::[allow_url_include] remote".to_string(),
                "::notice::[extension] loaded".to_string(),
            ]
        );
    }

    #[test]
    fn escapes_workflow_command_characters() {
        let report = report(
            RenderableVerdictStatus::Warn,
            vec![issue(RenderableSeverity::Warn, "k", "100% sure\r\nnext")],
        );
        assert_eq!(
            render_github_annotations(&report),
            vec!["::warning::[k] 100%25 sure%0D%0Anext".to_string()]
        );
    }
}
