use camino::{Utf8Path, Utf8PathBuf};
use symguard_repo::{DEFAULT_REFS_FILE, build_reference_model};
use tempfile::TempDir;

fn write_file(path: &Utf8Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(path, content).expect("write file");
}

fn setup_repo() -> (TempDir, Utf8PathBuf) {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8 path");

    write_file(
        &root.join("cmd/app/main.go"),
        "package main\n\nimport \"pkg/internal/old\"\n",
    );
    write_file(
        &root.join("pkg/api/api.pb.go"),
        "// Code generated by protoc-gen-go. DO NOT EDIT.\n\npackage api\n",
    );

    let refs = r#"{
  "units": [
    {
      "path": "pkg/api/api.pb.go",
      "imports": [{"path": "pkg/internal/old", "span": {"start": {"line": 5, "col": 2}, "end": {"line": 5, "col": 20}}}]
    },
    {
      "path": "cmd/app/main.go",
      "imports": [{"path": "pkg/internal/old", "span": {"start": {"line": 3, "col": 8}, "end": {"line": 3, "col": 26}}}],
      "symbols": [{"module": "pkg/internal/old", "name": "Context", "span": {"start": {"line": 9, "col": 5}, "end": {"line": 9, "col": 16}}}]
    },
    {
      "path": "gen/missing.go",
      "generated": true
    },
    {
      "path": "not/on/disk.go"
    }
  ]
}"#;
    write_file(&root.join(DEFAULT_REFS_FILE), refs);

    (temp, root)
}

#[test]
fn loads_units_sorted_by_path() {
    let (_temp, root) = setup_repo();
    let model = build_reference_model(&root, None).expect("build model");

    let paths: Vec<&str> = model.units.iter().map(|u| u.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "cmd/app/main.go",
            "gen/missing.go",
            "not/on/disk.go",
            "pkg/api/api.pb.go"
        ]
    );

    let main = &model.units[0];
    assert_eq!(main.imports.len(), 1);
    assert_eq!(main.imports[0].span.start.line, 3);
    assert_eq!(main.symbols[0].name, "Context");
}

#[test]
fn classifies_generated_units() {
    let (_temp, root) = setup_repo();
    let model = build_reference_model(&root, None).expect("build model");

    let generated: Vec<(&str, bool)> = model
        .units
        .iter()
        .map(|u| (u.path.as_str(), u.generated))
        .collect();
    assert_eq!(
        generated,
        vec![
            ("cmd/app/main.go", false),
            ("gen/missing.go", true),
            ("not/on/disk.go", false),
            ("pkg/api/api.pb.go", true),
        ]
    );
}

#[test]
fn explicit_refs_path_is_used() {
    let (_temp, root) = setup_repo();
    let alt = root.join("out/refs.json");
    write_file(&alt, r#"{"units": [{"path": "only.go", "generated": false}]}"#);

    let model = build_reference_model(&root, Some(&alt)).expect("build model");
    assert_eq!(model.units.len(), 1);
    assert_eq!(model.units[0].path.as_str(), "only.go");
}

#[test]
fn malformed_manifest_names_the_file() {
    let (_temp, root) = setup_repo();
    write_file(&root.join(DEFAULT_REFS_FILE), "{ not json");

    let err = build_reference_model(&root, None).expect_err("malformed");
    assert!(format!("{err:#}").contains("parse"));
}
