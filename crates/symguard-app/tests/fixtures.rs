use camino::Utf8PathBuf;
use symguard_app::{CheckInput, run_check};
use symguard_settings::Overrides;
use symguard_types::{SymguardReport, Verdict, ids};

fn fixture(name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .join(name)
}

fn check_fixture(name: &str) -> SymguardReport {
    let root = fixture(name);
    let config_text = std::fs::read_to_string(root.join("symguard.toml")).unwrap_or_default();
    run_check(CheckInput {
        repo_root: &root,
        config_text: &config_text,
        overrides: Overrides::default(),
        refs: None,
    })
    .unwrap_or_else(|e| panic!("fixture {name} failed: {e:#}"))
    .report
}

fn subjects(report: &SymguardReport) -> Vec<&str> {
    report
        .findings
        .iter()
        .filter_map(|f| f.data["subject"].as_str())
        .collect()
}

#[test]
fn clean_fixture_passes() {
    let report = check_fixture("clean");
    assert_eq!(report.verdict, Verdict::Pass);
    assert!(report.findings.is_empty());
    assert_eq!(report.data.imports_scanned, 2);
    assert_eq!(report.data.symbols_scanned, 1);
}

#[test]
fn forbidden_imports_fixture() {
    let report = check_fixture("forbidden_imports");
    assert_eq!(report.verdict, Verdict::Fail);
    assert_eq!(report.findings.len(), 3);
    assert_eq!(
        subjects(&report),
        ["pkg/internal/forbidden", "pkg/internal/old", "pkg/internal/legacy"]
    );

    let codes: Vec<&str> = report.findings.iter().map(|f| f.code.as_str()).collect();
    assert_eq!(
        codes,
        [
            ids::CODE_FORBIDDEN_IMPORT,
            ids::CODE_REPLACEABLE_IMPORT,
            ids::CODE_REPLACEABLE_IMPORT
        ]
    );
    assert_eq!(
        report.findings[2].data["fix"]["new_text"],
        "\"pkg/internal/modern\""
    );
}

#[test]
fn renamed_symbols_fixture() {
    let report = check_fixture("renamed_symbols");
    assert_eq!(report.verdict, Verdict::Fail);
    assert_eq!(
        subjects(&report),
        ["pkg/internal/helpers.Constant", "fmt.Printf"]
    );
    assert_eq!(report.findings[1].data["replacement"], "myfmt.Fprintf");
    assert!(
        report
            .findings
            .iter()
            .all(|f| f.check_id == ids::CHECK_SYMBOLS_FORBIDDEN && f.data.get("fix").is_none())
    );
}

#[test]
fn vendored_fixture_matches_bare_rules() {
    let report = check_fixture("vendored");
    assert_eq!(report.verdict, Verdict::Fail);
    assert_eq!(subjects(&report), ["pkg/foo", "external.External"]);
}

#[test]
fn allowlist_fixture_forbids_unlisted_references() {
    let report = check_fixture("allowlist");
    assert_eq!(report.verdict, Verdict::Fail);
    assert_eq!(subjects(&report), ["os", "fmt.Sprintf"]);
    assert!(report.findings.iter().all(|f| f.data["mode"] == "allowlist"));
}

#[test]
fn generated_fixture_is_skipped() {
    let report = check_fixture("generated_skipped");
    assert_eq!(report.verdict, Verdict::Pass);
    assert_eq!(report.data.units_skipped, 1);
    assert_eq!(report.data.units_scanned, 0);
}

#[test]
fn warn_profile_override_downgrades_verdict() {
    let root = fixture("vendored");
    let config_text = std::fs::read_to_string(root.join("symguard.toml")).expect("config");
    let report = run_check(CheckInput {
        repo_root: &root,
        config_text: &config_text,
        overrides: Overrides {
            profile: Some("warn".to_string()),
            ..Overrides::default()
        },
        refs: None,
    })
    .expect("check")
    .report;
    assert_eq!(report.verdict, Verdict::Warn);
    assert_eq!(report.findings.len(), 2);
}
