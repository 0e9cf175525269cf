//! The `check` use case: evaluate policy against the reference manifest and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use symguard_settings::{Overrides, ResolvedConfig, SymguardConfigV1};
use symguard_types::{ReportEnvelope, SCHEMA_REPORT_V1, SymguardReport, ToolMeta, Verdict};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Repository root path.
    pub repo_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Reference manifest; defaults to `symguard.refs.json` under the repo root.
    pub refs: Option<&'a Utf8Path>,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: SymguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Parse config text; empty is allowed and means defaults.
pub fn load_config(config_text: &str) -> anyhow::Result<SymguardConfigV1> {
    if config_text.trim().is_empty() {
        return Ok(SymguardConfigV1::default());
    }
    symguard_settings::parse_config_toml(config_text).context("parse config")
}

/// Run the check use case: resolve config, load references, evaluate policy, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let cfg = load_config(input.config_text)?;
    let resolved =
        symguard_settings::resolve_config(cfg, input.overrides.clone()).context("resolve config")?;

    let model = symguard_repo::build_reference_model(input.repo_root, input.refs)
        .context("build reference model")?;

    let domain_report = symguard_domain::evaluate(&model, &resolved.effective);

    tracing::info!(
        verdict = ?domain_report.verdict,
        units = domain_report.data.units_scanned,
        findings = domain_report.data.findings_total,
        errors = domain_report.counts.error,
        warnings = domain_report.counts.warning,
        "check finished"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "symguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data: domain_report.data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
