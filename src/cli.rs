//! Command-line surface for the auditor.
//!
//! The core is a library; this is the CI harness around it, responsible
//! for argument handling, report printing, and exit-code semantics.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::audit::Auditor;
use crate::config::{Config, ReportFormat};
use crate::errors::FactlintError;
use crate::report;
use crate::rules::{RuleRegistry, Topic};
use crate::telemetry;

#[derive(Parser)]
#[command(name = "factlint")]
#[command(about = "Audit course content for known technical misconceptions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path (defaults to factlint.toml if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Print violations only, no summary
    #[arg(short, long)]
    quiet: bool,

    /// Verbose mode (per-file progress on stderr)
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a content tree (the default command)
    #[command(alias = "a")]
    Audit {
        /// Root of the content tree
        #[arg(default_value = ".")]
        path: String,

        /// Content file name to search for (overrides config)
        #[arg(long, value_name = "NAME")]
        file_name: Option<String>,

        /// Report format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,
    },

    /// List the registered misconception rules
    #[command(alias = "r")]
    Rules {
        /// Only rules for one topic area
        #[arg(long, value_enum)]
        topic: Option<Topic>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        telemetry::init_tracing_verbose();
    } else {
        telemetry::init_tracing();
    }

    let mut config = Config::load(cli.config.as_deref())?;
    config.quiet = cli.quiet;

    match cli.command {
        Some(Commands::Audit {
            path,
            file_name,
            format,
        }) => run_audit(&path, file_name, format, &config),
        Some(Commands::Rules { topic }) => {
            list_rules(topic);
            Ok(())
        }
        // No subcommand: audit the working directory with config defaults
        None => run_audit(".", None, None, &config),
    }
}

fn run_audit(
    path: &str,
    file_name: Option<String>,
    format: Option<ReportFormat>,
    config: &Config,
) -> Result<()> {
    let registry = RuleRegistry::builtin();
    let mut auditor = Auditor::from_config(registry, config);
    if let Some(name) = file_name {
        auditor = auditor.with_file_name(name);
    }

    let report = auditor.run(std::path::Path::new(path));

    match format.unwrap_or(config.format) {
        ReportFormat::Text => print!("{}", report::render_text(&report, config.quiet)),
        ReportFormat::Json => {
            println!("{}", report::render_json(&report).map_err(FactlintError::Report)?)
        }
    }

    if report.passed() {
        Ok(())
    } else {
        Err(FactlintError::AuditFailed {
            violations: report.violations.len(),
        }
        .into())
    }
}

fn list_rules(topic: Option<Topic>) {
    let registry = RuleRegistry::builtin();
    let rules: Vec<_> = match topic {
        Some(topic) => registry.by_topic(topic).collect(),
        None => registry.rules().iter().collect(),
    };

    for rule in rules {
        println!(
            "{:<28} {:<12} {}",
            rule.id,
            rule.topic.as_str(),
            rule.description
        );
    }
}
