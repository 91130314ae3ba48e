use crate::sanitize::sanitize;
use inicheck_types::{ids, Severity};
use std::fmt;

/// One declarative rule read from a rule file.
///
/// Rules are plain data: the binder copies their fields onto the matching setting and then
/// drops them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub target_key: String,
    pub expected_value: String,
    pub severity: Severity,
    pub message_template: String,
    /// `Some(true)` applies only in restricted mode, `Some(false)` only outside it.
    pub mode_condition: Option<bool>,
}

impl Rule {
    pub fn new(
        target_key: impl Into<String>,
        expected_value: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            target_key: target_key.into(),
            expected_value: expected_value.into(),
            severity,
            message_template: String::new(),
            mode_condition: None,
        }
    }

    pub fn with_message(mut self, template: impl Into<String>) -> Self {
        self.message_template = template.into();
        self
    }

    pub fn when_restricted(mut self, restricted: bool) -> Self {
        self.mode_condition = Some(restricted);
        self
    }
}

/// What a bound setting's value is expected to look like.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expectation {
    /// `non-blank`: any non-empty value.
    NonBlank,
    /// `true`: the value reads as on.
    On,
    /// `false`: the value does not read as on.
    Off,
    /// Empty `VALUE`: nothing usable was configured, so evaluation always fails.
    Unset,
    /// Anything else, compared against the value. Stored sanitized.
    Literal(String),
}

impl Expectation {
    /// Interpret a rule's `VALUE` attribute. Sentinels are matched case-sensitively.
    pub fn parse(raw: &str) -> Self {
        match raw {
            ids::EXPECT_NON_BLANK => Expectation::NonBlank,
            ids::EXPECT_TRUE => Expectation::On,
            ids::EXPECT_FALSE => Expectation::Off,
            "" => Expectation::Unset,
            other => Expectation::Literal(sanitize(other)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Expectation::NonBlank => ids::EXPECT_NON_BLANK,
            Expectation::On => ids::EXPECT_TRUE,
            Expectation::Off => ids::EXPECT_FALSE,
            Expectation::Unset => "",
            Expectation::Literal(s) => s,
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Substitute `$name$` and `$value$` in a single left-to-right pass.
///
/// Substituted text is never rescanned, so a value containing `$name$` stays literal.
pub fn render_message(template: &str, name: &str, value: &str) -> String {
    let mut out = String::with_capacity(template.len() + name.len() + value.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix(ids::PLACEHOLDER_NAME) {
            out.push_str(name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(ids::PLACEHOLDER_VALUE) {
            out.push_str(value);
            rest = after;
        } else {
            out.push('$');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);

    out
}
