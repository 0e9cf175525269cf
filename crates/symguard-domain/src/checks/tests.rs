use super::{imports, symbols, utils};
use crate::model::ReferenceModel;
use crate::policy::CheckPolicy;
use crate::rules::{ModuleRule, RuleSet, RuleSets, SymbolRule};
use crate::test_support::{config, config_with_rule_sets, config_with_rules, import, symbol, unit};
use globset::{Glob, GlobSetBuilder};
use symguard_types::{Severity, ids};

fn model(units: Vec<crate::model::SourceUnit>) -> ReferenceModel {
    ReferenceModel {
        units,
        ..ReferenceModel::default()
    }
}

#[test]
fn imports_reports_forbidden_and_replaceable_modules() {
    let cfg = config_with_rules(
        vec![
            ModuleRule::new("pkg/internal/forbidden"),
            ModuleRule::new("pkg/internal/old").replaced_by("pkg/internal/new"),
        ],
        vec![],
    );
    let model = model(vec![unit(
        "cmd/app/main.go",
        vec![
            import("fmt", 3),
            import("pkg/internal/forbidden", 4),
            import("pkg/internal/old", 5),
        ],
        vec![],
    )]);

    let mut out = Vec::new();
    imports::run(&model, &cfg, &mut out);

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].code, ids::CODE_FORBIDDEN_IMPORT);
    assert_eq!(out[0].message, "pkg/internal/forbidden should not be used");
    assert_eq!(out[0].data["mode"], "denylist");
    assert!(out[0].data.get("fix").is_none());

    let replaced = &out[1];
    assert_eq!(replaced.code, ids::CODE_REPLACEABLE_IMPORT);
    assert_eq!(
        replaced.message,
        "pkg/internal/old should be replaced with pkg/internal/new"
    );
    assert_eq!(replaced.data["replacement"], "pkg/internal/new");
    assert_eq!(replaced.data["fix"]["new_text"], "\"pkg/internal/new\"");
    assert_eq!(
        replaced.data["fix"]["message"],
        "Replace import of pkg/internal/old with pkg/internal/new"
    );

    let loc = replaced.location.as_ref().expect("location");
    assert_eq!(loc.path.as_str(), "cmd/app/main.go");
    assert_eq!(loc.line, Some(5));
    assert_eq!(loc.col, Some(2));
    assert!(replaced.fingerprint.as_ref().is_some_and(|f| f.len() == 64));
}

#[test]
fn symbols_reports_without_fix() {
    let cfg = config_with_rules(
        vec![],
        vec![
            SymbolRule::new("pkg/internal/helpers", "Constant"),
            SymbolRule::new("fmt", "Print").renamed_to("Println"),
        ],
    );
    let model = model(vec![unit(
        "main.go",
        vec![],
        vec![
            symbol("pkg/internal/helpers", "Constant", 10),
            symbol("fmt", "Print", 11),
            symbol("fmt", "Println", 12),
        ],
    )]);

    let mut out = Vec::new();
    symbols::run(&model, &cfg, &mut out);

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].code, ids::CODE_FORBIDDEN_SYMBOL);
    assert_eq!(out[1].code, ids::CODE_REPLACEABLE_SYMBOL);
    assert_eq!(out[1].data["replacement"], "fmt.Println");
    assert!(out.iter().all(|f| f.data.get("fix").is_none()));
}

#[test]
fn allowlist_mode_flags_everything_unlisted() {
    let cfg = config_with_rule_sets(RuleSets {
        packages: RuleSet {
            allowlist: true,
            rules: vec![ModuleRule::new("fmt,strings")],
        },
        symbols: RuleSet::default(),
    });
    let model = model(vec![unit(
        "main.go",
        vec![import("fmt", 3), import("os", 4)],
        vec![],
    )]);

    let mut out = Vec::new();
    imports::run(&model, &cfg, &mut out);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].message, "os should not be used");
    assert_eq!(out[0].data["mode"], "allowlist");
}

#[test]
fn vendored_imports_use_the_bare_path() {
    let cfg = config_with_rules(vec![ModuleRule::new("pkg/foo")], vec![]);
    let model = model(vec![unit(
        "main.go",
        vec![import("example.com/app/vendor/pkg/foo", 3)],
        vec![],
    )]);

    let mut out = Vec::new();
    imports::run(&model, &cfg, &mut out);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].data["subject"], "pkg/foo");
    assert_eq!(out[0].message, "pkg/foo should not be used");
}

#[test]
fn disabled_check_emits_nothing() {
    let mut cfg = config_with_rules(vec![ModuleRule::new("fmt")], vec![]);
    cfg.checks.insert(
        ids::CHECK_IMPORTS_FORBIDDEN.to_string(),
        CheckPolicy::disabled(),
    );
    let model = model(vec![unit("main.go", vec![import("fmt", 1)], vec![])]);

    let mut out = Vec::new();
    imports::run(&model, &cfg, &mut out);
    assert!(out.is_empty());
}

#[test]
fn check_severity_is_applied() {
    let mut cfg = config_with_rules(vec![], vec![SymbolRule::new("fmt", "Print")]);
    cfg.checks.insert(
        ids::CHECK_SYMBOLS_FORBIDDEN.to_string(),
        CheckPolicy::enabled(Severity::Info),
    );
    let model = model(vec![unit("main.go", vec![], vec![symbol("fmt", "Print", 1)])]);

    let mut out = Vec::new();
    symbols::run(&model, &cfg, &mut out);
    assert_eq!(out[0].severity, Severity::Info);
}

#[test]
fn generated_and_excluded_units_are_out_of_scope() {
    let mut cfg = config();
    let mut builder = GlobSetBuilder::new();
    builder.add(Glob::new("**/testdata/**").expect("glob"));
    cfg.exclude = builder.build().expect("globset");

    let mut generated = unit("gen.go", vec![], vec![]);
    generated.generated = true;
    let excluded = unit("pkg/testdata/x.go", vec![], vec![]);
    let plain = unit("pkg/x.go", vec![], vec![]);

    assert!(!utils::in_scope(&generated, &cfg));
    assert!(!utils::in_scope(&excluded, &cfg));
    assert!(utils::in_scope(&plain, &cfg));

    cfg.skip_generated = false;
    assert!(utils::in_scope(&generated, &cfg));
}

#[test]
fn run_all_skips_generated_units() {
    let cfg = config_with_rules(vec![ModuleRule::new("fmt")], vec![]);
    let mut generated = unit("gen.go", vec![import("fmt", 1)], vec![]);
    generated.generated = true;
    let model = model(vec![generated, unit("main.go", vec![import("fmt", 1)], vec![])]);

    let report = crate::evaluate(&model, &cfg);
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.data.units_scanned, 1);
    assert_eq!(report.data.units_skipped, 1);
    assert_eq!(report.data.imports_scanned, 1);
}
