//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Template expansion shape and determinism
//! - Equivalence of templated and hand-expanded rules
//! - Decision lookups and findings ordering

use crate::compiled::CompiledPolicy;
use crate::engine::evaluate;
use crate::model::ReferenceModel;
use crate::normalize::normalize_module_rules;
use crate::rules::{ModuleRule, RuleSet, RuleSets};
use crate::template::expand;
use crate::test_support::{config_with_rules, import, unit};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// A single path segment without any template metacharacters.
fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,7}").expect("valid regex")
}

/// A slash-joined module path.
fn arb_module_path() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment(), 1..4).prop_map(|parts| parts.join("/"))
}

/// `prefix{a,b,...}suffix` plus its hand expansion.
fn arb_grouped() -> impl Strategy<Value = (String, Vec<String>)> {
    (
        arb_module_path(),
        prop::collection::vec(arb_segment(), 1..5),
        prop::option::of(arb_segment()),
    )
        .prop_map(|(prefix, alts, suffix)| {
            let suffix = suffix.map(|s| format!("/{s}")).unwrap_or_default();
            let pattern = format!("{prefix}/{{{}}}{suffix}", alts.join(","));
            let expanded = alts
                .iter()
                .map(|a| format!("{prefix}/{a}{suffix}"))
                .collect();
            (pattern, expanded)
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn plain_lists_expand_to_their_elements(paths in prop::collection::vec(arb_module_path(), 1..6)) {
        let expanded = expand(&paths.join(",")).expect("valid pattern");
        prop_assert_eq!(expanded, paths);
    }

    #[test]
    fn grouped_patterns_expand_in_order((pattern, expected) in arb_grouped()) {
        prop_assert_eq!(expand(&pattern).expect("valid pattern"), expected);
    }

    #[test]
    fn expansions_contain_no_metacharacters((pattern, _) in arb_grouped()) {
        for item in expand(&pattern).expect("valid pattern") {
            prop_assert!(!item.contains([',', '{', '}']), "{item}");
            prop_assert!(!item.is_empty());
        }
    }

    #[test]
    fn expansion_never_panics(pattern in "[a-z{},/]{0,16}") {
        let _ = expand(&pattern);
    }

    #[test]
    fn templated_rule_matches_hand_expansion((pattern, expected) in arb_grouped()) {
        let templated = normalize_module_rules(&[ModuleRule::new(&pattern)], false)
            .expect("templated")
            .to_map();
        let hand: Vec<ModuleRule> = expected.iter().map(|p| ModuleRule::new(p.as_str())).collect();
        let hand = normalize_module_rules(&hand, false).expect("hand").to_map();
        prop_assert_eq!(templated, hand);
    }

    #[test]
    fn deny_mode_forbids_exactly_the_table((pattern, expected) in arb_grouped(), other in arb_module_path()) {
        let policy = CompiledPolicy::compile(&RuleSets {
            packages: RuleSet { allowlist: false, rules: vec![ModuleRule::new(&pattern)] },
            symbols: RuleSet::default(),
        })
        .expect("compile");

        for path in &expected {
            prop_assert!(!policy.decide_module(path).is_allowed());
        }
        prop_assert_eq!(
            policy.decide_module(&other).is_allowed(),
            !expected.contains(&other)
        );
    }

    #[test]
    fn findings_order_is_deterministic(paths in prop::collection::vec(arb_module_path(), 1..8)) {
        let cfg = config_with_rules(
            paths.iter().map(|p| ModuleRule::new(p.as_str())).collect(),
            vec![],
        );
        let forward = ReferenceModel {
            units: vec![unit(
                "main.go",
                paths.iter().enumerate().map(|(i, p)| import(p, i as u32 + 1)).collect(),
                vec![],
            )],
            ..ReferenceModel::default()
        };
        let mut reversed = forward.clone();
        reversed.units[0].imports.reverse();

        let a = evaluate(&forward, &cfg);
        let b = evaluate(&reversed, &cfg);
        prop_assert_eq!(a.findings, b.findings);
    }
}
