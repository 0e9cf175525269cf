//! CLI entry point for symguard.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, I/O, and
//! exit codes. All business logic lives in the `symguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use symguard_app::{
    CheckInput, parse_report_json, render_annotations, render_markdown, run_check, run_expand,
    run_tables, runtime_error_report, serialize_report, to_renderable, verdict_exit_code,
};
use symguard_settings::Overrides;
use symguard_types::SymguardReport;

/// Environment variable holding the log filter (e.g. `debug`, `symguard_domain=trace`).
const LOG_ENV: &str = "SYMGUARD_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "symguard",
    version,
    about = "Import and symbol policy guard driven by a reference manifest"
)]
struct Cli {
    /// Repository root (directory containing symguard.toml and symguard.refs.json).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Path to symguard config TOML, relative to the repository root.
    #[arg(long, default_value = "symguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|warn).
    #[arg(long)]
    profile: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long)]
    max_findings: Option<u32>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate policy against the reference manifest and write artifacts.
    Check {
        /// Reference manifest (defaults to symguard.refs.json under the repository root).
        #[arg(long)]
        refs: Option<Utf8PathBuf>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/symguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/symguard/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/symguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/symguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Print the expansion of a rule template.
    Expand {
        /// Template, e.g. `go/{ast,parser},fmt`.
        pattern: String,

        /// Replacement template; pairs each expanded item with its replacement.
        #[arg(long)]
        replacement: Option<String>,
    },

    /// Validate the configuration and print the normalized rule tables as JSON.
    Tables,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref refs,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_check(
            &cli,
            refs.as_deref(),
            report_out,
            write_markdown,
            markdown_out,
        ),
        Commands::Md {
            ref report,
            ref output,
        } => cmd_md(report, output.as_deref()),
        Commands::Annotations { ref report, max } => cmd_annotations(report, max),
        Commands::Expand {
            ref pattern,
            ref replacement,
        } => cmd_expand(pattern, replacement.as_deref()),
        Commands::Tables => cmd_tables(&cli),
    }
}

fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        max_findings: cli.max_findings,
    }
}

/// Config text, or empty when the file does not exist (defaults apply).
fn read_config(repo_root: &Utf8Path, config: &Utf8Path) -> anyhow::Result<String> {
    let path = repo_root.join(config);
    match std::fs::read_to_string(&path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(config = %path, "config not found; using defaults");
            Ok(String::new())
        }
        Err(e) => Err(e).with_context(|| format!("read config: {}", path)),
    }
}

fn cmd_check(
    cli: &Cli,
    refs: Option<&Utf8Path>,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let repo_root = cli
        .repo_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.repo_root.clone());

    let result = (|| -> anyhow::Result<i32> {
        if !repo_root.exists() {
            anyhow::bail!("repo root does not exist: {}", repo_root);
        }
        let cfg_text = read_config(&repo_root, &cli.config)?;

        let output = run_check(CheckInput {
            repo_root: &repo_root,
            config_text: &cfg_text,
            overrides: overrides(cli),
            refs,
        })?;

        write_report_file(report_out, &output.report).context("write report json")?;

        if write_markdown {
            let md = render_markdown(&to_renderable(&output.report));
            write_text_file(markdown_out, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "check could not run");
            let report = runtime_error_report(&format!("{err:#}"));
            if let Err(write_err) = write_report_file(report_out, &report) {
                tracing::warn!(error = %write_err, "failed to write runtime error report");
            }
            eprintln!("symguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &Utf8Path, report: &SymguardReport) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    write_bytes(path, &data)
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    write_bytes(path, text.as_bytes())
}

fn write_bytes(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write: {}", path))
}

fn read_report(path: &Utf8Path) -> anyhow::Result<SymguardReport> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read report: {}", path))?;
    parse_report_json(&text)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    let md = render_markdown(&to_renderable(&report));

    match output {
        Some(out_path) => write_text_file(out_path, &md).context("write markdown output")?,
        None => print!("{md}"),
    }

    Ok(())
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{annotation}");
    }
    Ok(())
}

fn cmd_expand(pattern: &str, replacement: Option<&str>) -> anyhow::Result<()> {
    for line in run_expand(pattern, replacement)?.lines() {
        println!("{line}");
    }
    Ok(())
}

fn cmd_tables(cli: &Cli) -> anyhow::Result<()> {
    let cfg_text = read_config(&cli.repo_root, &cli.config)?;
    let tables = run_tables(&cfg_text, overrides(cli))?;
    println!(
        "{}",
        serde_json::to_string_pretty(&tables).context("serialize tables")?
    );
    Ok(())
}
