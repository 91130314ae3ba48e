//! The `check` use case: load inputs, audit, and produce a report.

use crate::error::CheckError;
use crate::source::read_bounded;
use camino::{Utf8Path, Utf8PathBuf};
use inicheck_domain::policy::FailOn;
use inicheck_domain::report::DomainReport;
use inicheck_domain::{audit, RawSetting, SettingStore};
use inicheck_settings::{
    InicheckConfigV1, Overrides, RulesSource, BUILTIN_RULES, BUILTIN_RULES_NAME,
};
use inicheck_types::{
    AuditData, InicheckReport, ReportEnvelope, SeverityCounts, ToolMeta, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;
use tracing::debug;

/// Where to look for `inicheck.toml`.
#[derive(Clone, Copy, Debug)]
pub enum ConfigLocation<'a> {
    /// Named by the user: it must exist.
    Explicit(&'a Utf8Path),
    /// The conventional location: defaults apply when it is absent.
    Default(&'a Utf8Path),
}

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Settings file to audit.
    pub settings_path: &'a Utf8Path,
    pub config: ConfigLocation<'a>,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Size limit applied to every file read.
    pub max_bytes: u64,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: InicheckReport,
    /// Effective `fail_on` threshold, for the exit code.
    pub fail_on: FailOn,
}

impl CheckOutput {
    pub fn exit_code(&self) -> i32 {
        fail_on_exit_code(&self.report.counts, self.fail_on)
    }
}

/// Run the check use case: resolve config, load rules and settings, audit, produce report.
pub fn run_check(input: CheckInput<'_>) -> Result<CheckOutput, CheckError> {
    let started_at = OffsetDateTime::now_utc();

    let (cfg, config_dir) = load_config(input.config, input.max_bytes)?;
    let resolved = inicheck_settings::resolve_config(cfg, input.overrides)
        .map_err(|err| CheckError::Config(format!("{err:#}")))?;
    let policy = resolved.policy;

    // Rules first: a broken rule set rejects the run before the settings file is touched.
    let (rules_origin, rules_text) = match resolved.rules {
        RulesSource::Cli(path) => load_rules_file(Utf8PathBuf::from(path), input.max_bytes)?,
        RulesSource::Config(path) => {
            let path = match &config_dir {
                Some(dir) => dir.join(path),
                None => Utf8PathBuf::from(path),
            };
            load_rules_file(path, input.max_bytes)?
        }
        RulesSource::Builtin => (BUILTIN_RULES_NAME.to_string(), BUILTIN_RULES.to_string()),
    };
    let rules = inicheck_parser::parse_rules(&rules_text).map_err(|source| CheckError::Rules {
        origin: rules_origin.clone(),
        source,
    })?;
    debug!(origin = %rules_origin, rules = rules.len(), "loaded rules");

    let settings_file = read_bounded(input.settings_path, input.max_bytes)?;
    let raw: Vec<RawSetting> =
        inicheck_parser::parse_settings(&settings_file.text).map_err(|source| {
            CheckError::Settings {
                path: input.settings_path.to_owned(),
                source,
            }
        })?;
    debug!(path = %input.settings_path, entries = raw.len(), "parsed settings");

    let mut store = SettingStore::build(raw, &policy.restricted_mode_key)
        .with_source(input.settings_path.as_str());

    let DomainReport {
        verdict,
        issues,
        counts,
        stats,
        restricted_mode,
        settings_scanned,
    } = audit(&mut store, rules, &policy);

    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "inicheck".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict,
        counts,
        issues: issues.into_vec(),
        data: AuditData {
            file: input.settings_path.to_string(),
            file_size: settings_file.size,
            rules_source: rules_origin,
            restricted_mode,
            settings_scanned,
            rules_loaded: stats.rules_loaded,
            rules_bound: stats.bound,
            rules_skipped_missing: stats.skipped_missing,
            rules_skipped_mode: stats.skipped_mode,
            rules_skipped_ignored: stats.skipped_ignored,
            rules_skipped_duplicate: stats.skipped_duplicate,
        },
    };

    Ok(CheckOutput {
        report,
        fail_on: policy.fail_on,
    })
}

/// Map issue counts to an exit code: 2 once the `fail_on` threshold is reached, else 0.
pub fn fail_on_exit_code(counts: &SeverityCounts, fail_on: FailOn) -> i32 {
    let failed = match fail_on {
        FailOn::Never => false,
        FailOn::Warning => counts.warn + counts.error > 0,
        FailOn::Error => counts.error > 0,
    };
    if failed { 2 } else { 0 }
}

fn load_config(
    location: ConfigLocation<'_>,
    max_bytes: u64,
) -> Result<(InicheckConfigV1, Option<Utf8PathBuf>), CheckError> {
    let path = match location {
        ConfigLocation::Explicit(path) => path,
        ConfigLocation::Default(path) if path.is_file() => path,
        ConfigLocation::Default(path) => {
            debug!(path = %path, "no config file, using defaults");
            return Ok((InicheckConfigV1::default(), None));
        }
    };

    let loaded = read_bounded(path, max_bytes)?;
    let dir = path.parent().map(Utf8Path::to_path_buf);
    if loaded.text.trim().is_empty() {
        return Ok((InicheckConfigV1::default(), dir));
    }

    let cfg = inicheck_settings::parse_config_toml(&loaded.text)
        .map_err(|err| CheckError::Config(format!("{path}: {err:#}")))?;
    debug!(path = %path, "loaded config");
    Ok((cfg, dir))
}

fn load_rules_file(path: Utf8PathBuf, max_bytes: u64) -> Result<(String, String), CheckError> {
    let loaded = read_bounded(&path, max_bytes)?;
    Ok((path.into_string(), loaded.text))
}
