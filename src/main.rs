//! iosgen - Cisco IOS switch configuration generator
//!
//! Collects device fields from defaults, a request file, the environment and
//! `--set` overrides, renders the configuration and reports the audit.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use iosgen::audit::{audit_request, blocks_output};
use iosgen::input::{RequestLoader, ENV_PREFIX};
use iosgen::models::{AuditFinding, Severity};
use iosgen::settings::Settings;
use iosgen::{render, utils, validate};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Plain configuration text
    Text,
    /// Configuration, filename and findings as one JSON document
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "iosgen")]
#[command(about = "Cisco IOS switch configuration generator", long_about = None)]
struct Args {
    /// Settings file path (default: iosgen.toml, then standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Request file with device fields (TOML, JSON or YAML)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Override a device field, e.g. --set vlan_id=20 (repeatable)
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Output directory for <hostname>_config.txt
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print the configuration to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Fail without producing output when the audit reports an error
    #[arg(long)]
    strict: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    filename: String,
    config: &'a str,
    findings: &'a [AuditFinding],
}

fn main() -> Result<()> {
    let args = Args::parse();

    let settings = Settings::load(args.config.as_deref())?;

    // Logs go to stderr so stdout only ever carries the artifact
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level)),
        )
        .init();

    let mut loader = RequestLoader::new()
        .env_prefix(ENV_PREFIX)
        .overrides(&args.set)?;
    if let Some(path) = &args.input {
        loader = loader.file(path);
    }
    let request = loader.load().context("Invalid device request")?;

    tracing::info!("Rendering configuration for {}", request.hostname);

    for field in validate::non_ip_fields(&request) {
        tracing::warn!("{} is not a dotted-quad address, rendering it as given", field);
    }

    let findings = audit_request(&request);
    report_findings(&findings);

    let strict = args.strict || settings.output.strict;
    if blocks_output(&findings, strict) {
        anyhow::bail!("Audit reported errors, refusing to emit configuration (strict mode)");
    }

    let script = render(&request);
    let filename = utils::artifact_filename(&request.hostname);

    match args.format {
        Format::Json => {
            let report = JsonReport {
                filename,
                config: &script,
                findings: &findings,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Format::Text if args.stdout => print!("{script}"),
        Format::Text => {
            let dir = args.out.unwrap_or(settings.output.directory);
            let path = utils::write_artifact(&dir, &request.hostname, &script)?;
            tracing::info!("Configuration written to {}", path.display());
        }
    }

    Ok(())
}

fn report_findings(findings: &[AuditFinding]) {
    for finding in findings {
        match finding.severity {
            Severity::Error => tracing::error!("Audit: {}", finding.message),
            Severity::Warning => tracing::warn!("Audit: {}", finding.message),
            Severity::Ok => tracing::info!("Audit: {}", finding.message),
        }
    }
}
