//! Config parsing, the built-in rule set, and policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.
//! Locating and reading `inicheck.toml` and rule files is the app layer's job.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{InicheckConfigV1, RuleConfig};
pub use presets::{BUILTIN_RULES, BUILTIN_RULES_NAME};
pub use resolve::{Overrides, ResolvedConfig, RulesSource};

/// File name looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "inicheck.toml";

/// Parse `inicheck.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<InicheckConfigV1> {
    let cfg: InicheckConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective policy and rule source (config file + CLI overrides).
pub fn resolve_config(
    cfg: InicheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
