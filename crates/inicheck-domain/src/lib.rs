//! Pure audit evaluation (no IO).
//!
//! Input: raw settings and rules produced by the parsers elsewhere.
//! Output: an ordered issue list + verdict + binding statistics.

#![forbid(unsafe_code)]

pub mod bind;
pub mod evaluate;
pub mod issues;
pub mod model;
pub mod policy;
pub mod report;
pub mod rule;
pub mod sanitize;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::audit;
pub use evaluate::{evaluate, is_on};
pub use issues::IssueList;
pub use model::{RawSetting, Setting, SettingStore};
pub use rule::{Expectation, Rule};
