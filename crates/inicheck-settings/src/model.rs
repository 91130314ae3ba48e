use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `inicheck.toml` schema v1.
///
/// This is a *user-facing* config model: unknown keys are ignored.
/// Values are kept as strings here and validated during resolution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InicheckConfigV1 {
    /// Optional schema string for tooling (`inicheck.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Rule file used when none is given on the command line.
    /// Relative paths are resolved against the directory holding this file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_file: Option<String>,

    /// Setting whose value switches restricted mode on (default `safe_mode`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restricted_mode_key: Option<String>,

    /// How literal expected values are compared: `exact` (default) or `ignore_case`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal_match: Option<String>,

    /// When issues fail the run: `never` (default), `warning`, or `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// Glob patterns of setting keys whose rules are skipped.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore: Vec<String>,

    /// Map of setting key -> rule override.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, RuleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleConfig {
    /// Set to `false` to skip every rule targeting this key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Replace the rule file's `LEVEL`: `info`, `warn`/`warning`, `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}
