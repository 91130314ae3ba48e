use crate::model::InicheckConfigV1;
use anyhow::Context;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use inicheck_domain::policy::{AuditPolicy, FailOn, LiteralMatch, RulePolicy};
use inicheck_domain::sanitize::normalize_key;
use inicheck_types::{ids, Severity};

/// Command-line values that win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub rules_file: Option<String>,
    pub restricted_mode_key: Option<String>,
    pub fail_on: Option<String>,
}

/// Where the rule set comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RulesSource {
    /// Named on the command line; relative to the working directory.
    Cli(String),
    /// Named by `rules_file` in the config; relative to the config file's directory.
    Config(String),
    /// Nothing named anywhere.
    Builtin,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub policy: AuditPolicy,
    pub rules: RulesSource,
}

pub fn resolve_config(
    cfg: InicheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != ids::SCHEMA_CONFIG_V1
    {
        anyhow::bail!(
            "unsupported config schema: {schema} (expected {})",
            ids::SCHEMA_CONFIG_V1
        );
    }

    let mut policy = AuditPolicy::default();

    if let Some(key) = overrides
        .restricted_mode_key
        .or(cfg.restricted_mode_key)
    {
        if key.trim().is_empty() {
            anyhow::bail!("restricted_mode_key must not be empty");
        }
        policy.restricted_mode_key = key;
    }

    if let Some(mode) = cfg.literal_match.as_deref() {
        policy.literal_match = parse_literal_match(mode)?;
    }

    if let Some(fail_on) = overrides.fail_on.or(cfg.fail_on) {
        policy.fail_on = parse_fail_on(&fail_on)?;
    }

    if !cfg.ignore.is_empty() {
        policy.ignore = Some(compile_ignore(&cfg.ignore)?);
    }

    // per-key overrides
    for (key, rc) in cfg.rules.iter() {
        let entry = policy
            .rules
            .entry(normalize_key(key))
            .or_insert_with(RulePolicy::enabled);

        if let Some(enabled) = rc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = rc.severity.as_deref() {
            entry.severity =
                Some(parse_severity(sev).with_context(|| format!("invalid severity for {key}"))?);
        }
    }

    let rules = match (overrides.rules_file, cfg.rules_file) {
        (Some(path), _) => RulesSource::Cli(path),
        (None, Some(path)) => RulesSource::Config(path),
        (None, None) => RulesSource::Builtin,
    };

    Ok(ResolvedConfig { policy, rules })
}

/// Ignore globs match normalized (lower-cased) keys, so they are compiled case-insensitively.
fn compile_ignore(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .with_context(|| format!("invalid ignore glob: {pattern}"))?;
        builder.add(glob);
    }
    builder.build().context("failed to compile ignore globs")
}

fn parse_literal_match(v: &str) -> anyhow::Result<LiteralMatch> {
    match v {
        "exact" => Ok(LiteralMatch::Exact),
        "ignore_case" => Ok(LiteralMatch::IgnoreCase),
        other => anyhow::bail!("unknown literal_match: {other} (expected exact|ignore_case)"),
    }
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warn),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "never" => Ok(FailOn::Never),
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected never|warning|error)"),
    }
}
