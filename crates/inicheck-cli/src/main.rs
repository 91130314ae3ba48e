//! CLI entry point for inicheck.
//!
//! This module is intentionally thin: it handles argument parsing, logging, I/O, and exit codes.
//! All business logic lives in the `inicheck-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use inicheck_app::{
    parse_report_json, render_annotations, render_markdown, render_text, run_check, schema_json,
    serialize_report, CheckInput, ConfigLocation, SchemaKind, MAX_INPUT_BYTES,
};
use inicheck_settings::{Overrides, DEFAULT_CONFIG_FILE};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "inicheck",
    version,
    about = "Audit php.ini-style settings files against XML rule sets"
)]
struct Cli {
    /// Path to inicheck config TOML (default: ./inicheck.toml when present).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    /// More log output on stderr (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Audit a settings file and print the issues.
    Check {
        /// Settings file to audit (e.g. php.ini).
        settings: Utf8PathBuf,

        /// XML rule file (default: config `rules_file`, then the built-in PHP rules).
        #[arg(value_name = "RULES")]
        rules_positional: Option<Utf8PathBuf>,

        /// XML rule file; same as the positional RULES argument.
        #[arg(long, conflicts_with = "rules_positional")]
        rules: Option<Utf8PathBuf>,

        /// Setting whose value switches restricted mode on.
        #[arg(long)]
        restricted_mode_key: Option<String>,

        /// Exit with status 2 once issues of this level are found.
        #[arg(long, value_parser = ["never", "warning", "warn", "error"])]
        fail_on: Option<String>,

        /// Output format on stdout.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Also write the JSON report here.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Also write a Markdown report here.
        #[arg(long)]
        markdown_out: Option<Utf8PathBuf>,

        /// Refuse input files larger than this many bytes.
        #[arg(long, default_value_t = MAX_INPUT_BYTES)]
        max_file_size: u64,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Print the JSON schema of the config file or the report.
    Schema {
        #[arg(value_enum)]
        kind: SchemaArg,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Markdown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SchemaArg {
    Config,
    Report,
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit 1; --help and --version are not errors.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Check {
            ref settings,
            ref rules_positional,
            ref rules,
            ref restricted_mode_key,
            ref fail_on,
            format,
            ref report_out,
            ref markdown_out,
            max_file_size,
        } => {
            let overrides = Overrides {
                rules_file: rules
                    .clone()
                    .or_else(|| rules_positional.clone())
                    .map(Utf8PathBuf::into_string),
                restricted_mode_key: restricted_mode_key.clone(),
                fail_on: fail_on.clone(),
            };
            let outputs = CheckOutputs {
                format,
                report_out: report_out.as_deref(),
                markdown_out: markdown_out.as_deref(),
            };
            let code = cmd_check(&cli, settings, overrides, max_file_size, outputs)?;
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Schema { kind } => cmd_schema(kind),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

struct CheckOutputs<'a> {
    format: Format,
    report_out: Option<&'a Utf8Path>,
    markdown_out: Option<&'a Utf8Path>,
}

fn cmd_check(
    cli: &Cli,
    settings: &Utf8Path,
    overrides: Overrides,
    max_bytes: u64,
    outputs: CheckOutputs<'_>,
) -> anyhow::Result<i32> {
    let default_config = Utf8PathBuf::from(DEFAULT_CONFIG_FILE);
    let config = match &cli.config {
        Some(path) => ConfigLocation::Explicit(path),
        None => ConfigLocation::Default(&default_config),
    };

    let output = run_check(CheckInput {
        settings_path: settings,
        config,
        overrides,
        max_bytes,
    })?;
    let report = &output.report;

    tracing::info!(
        issues = report.issues.len(),
        verdict = ?report.verdict,
        "check finished"
    );

    if let Some(path) = outputs.report_out {
        let data = serialize_report(report)?;
        write_file(path, &data).context("write report")?;
    }
    if let Some(path) = outputs.markdown_out {
        write_file(path, render_markdown(report).as_bytes()).context("write markdown report")?;
    }

    match outputs.format {
        Format::Text => print!("{}", render_text(report)),
        Format::Markdown => print!("{}", render_markdown(report)),
        Format::Json => {
            let data = serialize_report(report)?;
            print!("{}", String::from_utf8_lossy(&data));
        }
    }

    Ok(output.exit_code())
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write file: {}", path))?;
    Ok(())
}

fn read_report(path: &Utf8Path) -> anyhow::Result<inicheck_app::InicheckReport> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read report: {}", path))?;
    parse_report_json(&text)
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_file(&out_path, md.as_bytes()).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;

    for annotation in render_annotations(&report, max) {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_schema(kind: SchemaArg) -> anyhow::Result<()> {
    let kind = match kind {
        SchemaArg::Config => SchemaKind::Config,
        SchemaArg::Report => SchemaKind::Report,
    };
    print!("{}", schema_json(kind)?);
    Ok(())
}
