//! Stable DTOs and IDs used across the inicheck workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - the severity scale shared by rules, settings, and issues
//! - stable string IDs (schema names, rule-file attributes, expectation sentinels)

#![forbid(unsafe_code)]

pub mod ids;
pub mod receipt;

pub use receipt::{
    AuditData, InicheckReport, Issue, Location, ReportEnvelope, Severity, SeverityCounts,
    ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
