use crate::{model::SymguardConfigV1, presets};
use anyhow::Context;
use globset::{Glob, GlobSet, GlobSetBuilder};
use symguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn};
use symguard_domain::rules::RuleSet;
use symguard_domain::{CompiledPolicy, RuleSets};
use symguard_types::Severity;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub max_findings: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: SymguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile);

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    if let Some(skip) = cfg.skip_generated {
        effective.skip_generated = skip;
    }

    effective.exclude = build_exclude(&cfg.exclude)?;

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = cc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {check_id}"))?;
        }
    }

    // fail_on override from config
    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    let rules = rule_sets(&cfg);
    let mut policy = CompiledPolicy::compile(&rules).context("invalid rule configuration")?;
    if let Some(markers) = cfg.vendor_markers {
        policy = policy.with_vendor_markers(markers);
    }
    effective.rules = policy;

    tracing::debug!(
        profile = %effective.profile,
        module_entries = effective.rules.modules().len(),
        symbol_entries = effective.rules.symbols().len(),
        "resolved configuration"
    );

    Ok(ResolvedConfig { effective })
}

fn rule_sets(cfg: &SymguardConfigV1) -> RuleSets {
    RuleSets {
        packages: RuleSet {
            allowlist: cfg.packages.allowlist,
            rules: cfg.packages.rules.iter().map(Into::into).collect(),
        },
        symbols: RuleSet {
            allowlist: cfg.symbols.allowlist,
            rules: cfg.symbols.rules.iter().map(Into::into).collect(),
        },
    }
}

fn build_exclude(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).with_context(|| format!("invalid exclude glob: {pattern}"))?;
        builder.add(glob);
    }
    builder.build().context("failed to build exclude globs")
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
