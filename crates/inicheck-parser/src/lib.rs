//! Parsers that turn file contents into domain inputs.
//!
//! Both parsers are IO-free: they take the whole document as a string and either return the
//! complete result or an error. Nothing is returned for a document that fails half way.

#![forbid(unsafe_code)]

mod error;
mod ini;
mod rules;

pub use error::{IniError, RulesError};
pub use ini::parse_settings;
pub use rules::parse_rules;
