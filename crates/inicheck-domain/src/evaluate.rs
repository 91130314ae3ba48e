use crate::model::Setting;
use crate::policy::LiteralMatch;
use crate::rule::Expectation;

/// Boolean reading of a raw setting value: `On` or `True` in any ASCII case, or exactly `1`.
pub fn is_on(value: &str) -> bool {
    value.eq_ignore_ascii_case("on") || value.eq_ignore_ascii_case("true") || value == "1"
}

/// Decide whether a bound setting passes its expectation.
///
/// Reads only what binding copied onto the setting, so repeated calls agree.
pub fn evaluate(setting: &Setting, literal_match: LiteralMatch) -> bool {
    let value = setting.value();
    match setting.expected() {
        Expectation::NonBlank => !value.is_empty(),
        Expectation::On => is_on(value),
        Expectation::Off => !is_on(value),
        Expectation::Unset => false,
        Expectation::Literal(expected) => match literal_match {
            LiteralMatch::Exact => value == expected,
            LiteralMatch::IgnoreCase => value.to_lowercase() == expected.to_lowercase(),
        },
    }
}
