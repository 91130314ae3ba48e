//! Render use cases over in-memory reports.

use crate::report::to_renderable;
use inicheck_types::InicheckReport;

pub fn render_text(report: &InicheckReport) -> String {
    inicheck_render::render_text(&to_renderable(report))
}

pub fn render_markdown(report: &InicheckReport) -> String {
    inicheck_render::render_markdown(&to_renderable(report))
}

pub fn render_annotations(report: &InicheckReport, max: usize) -> Vec<String> {
    inicheck_render::render_github_annotations(&to_renderable(report))
        .into_iter()
        .take(max)
        .collect()
}
