//! Use case orchestration for inicheck.
//!
//! This crate provides the application layer: use cases that coordinate the parser, domain,
//! settings, and render layers. It is intentionally thin and delegates heavy lifting to them.
//!
//! The CLI crate depends on this; it only handles argument parsing, logging setup and output.

#![forbid(unsafe_code)]

mod check;
mod error;
mod render;
mod report;
mod schema;
mod source;

pub use check::{fail_on_exit_code, run_check, CheckInput, CheckOutput, ConfigLocation};
pub use error::CheckError;
pub use render::{render_annotations, render_markdown, render_text};
pub use report::{parse_report_json, serialize_report, to_renderable};
pub use schema::{schema_json, SchemaKind};
pub use source::{read_bounded, LoadedFile, MAX_INPUT_BYTES};

pub use inicheck_types::InicheckReport;
