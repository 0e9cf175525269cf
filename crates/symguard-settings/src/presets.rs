use globset::GlobSet;
use std::collections::BTreeMap;
use symguard_domain::CompiledPolicy;
use symguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn};
use symguard_types::Severity;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "warn" => warn_profile(),
        // default
        _ => strict_profile(),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        skip_generated: true,
        exclude: GlobSet::empty(),
        checks: default_checks(Severity::Error),
        rules: CompiledPolicy::default(),
    }
}

/// Same checks, reported as warnings that do not fail the run.
fn warn_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "warn".to_string(),
        checks: default_checks(Severity::Warning),
        ..strict_profile()
    }
}

fn default_checks(default_severity: Severity) -> BTreeMap<String, CheckPolicy> {
    symguard_types::ids::all_check_ids()
        .iter()
        .map(|id| (id.to_string(), CheckPolicy::enabled(default_severity)))
        .collect()
}
