//! Rendering for terminals and CI surfaces (plain text, Markdown, GitHub annotations).
//!
//! Renderers take a [`RenderableReport`] so they stay independent of the report schema.

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;
mod text;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableIssue, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
pub use text::render_text;
