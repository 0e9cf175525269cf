use crate::compiled::CompiledPolicy;
use crate::model::{ModuleReference, SourceUnit, SymbolReference};
use crate::policy::{CheckPolicy, EffectiveConfig, FailOn};
use crate::rules::{ModuleRule, RuleSet, RuleSets, SymbolRule};
use globset::GlobSet;
use std::collections::BTreeMap;
use symguard_types::{RepoPath, Severity, Span, ids};

pub fn import(path: &str, line: u32) -> ModuleReference {
    ModuleReference {
        path: path.to_string(),
        span: Span::new((line, 2), (line, 4 + path.len() as u32)),
    }
}

pub fn symbol(module: &str, name: &str, line: u32) -> SymbolReference {
    SymbolReference {
        module: module.to_string(),
        name: name.to_string(),
        span: Span::new((line, 1), (line, 1 + name.len() as u32)),
    }
}

pub fn unit(
    path: &str,
    imports: Vec<ModuleReference>,
    symbols: Vec<SymbolReference>,
) -> SourceUnit {
    SourceUnit {
        path: RepoPath::new(path),
        generated: false,
        imports,
        symbols,
    }
}

/// Strict-style config with both checks enabled at `error` and no rules.
pub fn config() -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    for id in ids::all_check_ids() {
        checks.insert(id.to_string(), CheckPolicy::enabled(Severity::Error));
    }
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        skip_generated: true,
        exclude: GlobSet::empty(),
        checks,
        rules: CompiledPolicy::default(),
    }
}

/// Deny-mode rules for both tables.
pub fn config_with_rules(modules: Vec<ModuleRule>, symbols: Vec<SymbolRule>) -> EffectiveConfig {
    config_with_rule_sets(RuleSets {
        packages: RuleSet {
            allowlist: false,
            rules: modules,
        },
        symbols: RuleSet {
            allowlist: false,
            rules: symbols,
        },
    })
}

pub fn config_with_rule_sets(rules: RuleSets) -> EffectiveConfig {
    EffectiveConfig {
        rules: CompiledPolicy::compile(&rules).expect("test rules compile"),
        ..config()
    }
}
