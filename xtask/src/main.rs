//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("cannot determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .context("xtask has no parent")
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(symguard_types::SymguardReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(symguard_settings::SymguardConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "symguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "symguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas/ matches what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        let expected = serialize_schema(&(spec.generate)())?;
        match fs::read_to_string(&path) {
            Ok(actual) if actual.replace("\r\n", "\n") == expected => {
                println!("✓ {}", spec.filename);
            }
            Ok(_) => mismatched.push(spec.filename),
            Err(_) => missing.push(spec.filename),
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("\nAll schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Run symguard over tests/fixtures and validate every report");
}

/// Check that a path is clean: no absolute paths, no `../`, forward slashes only.
fn is_clean_path(path: &str) -> bool {
    !(path.starts_with('/')
        || path.starts_with('\\')
        || path.contains("..")
        || path.contains('\\')
        || (path.len() >= 2 && path.as_bytes()[1] == b':'))
}

/// Problems with one report beyond schema validity.
fn report_hygiene(fixture: &str, report: &serde_json::Value) -> Vec<String> {
    let mut errors = Vec::new();
    let findings = report
        .get("findings")
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default();

    for (i, finding) in findings.iter().enumerate() {
        if let Some(path) = finding
            .get("location")
            .and_then(|loc| loc.get("path"))
            .and_then(|v| v.as_str())
            && !is_clean_path(path)
        {
            errors.push(format!(
                "fixture '{fixture}': finding[{i}].location.path '{path}' is not clean"
            ));
        }
        if finding.get("fingerprint").is_none_or(|v| v.is_null()) {
            errors.push(format!("fixture '{fixture}': finding[{i}] has no fingerprint"));
        }
    }

    let total = report
        .pointer("/data/findings_total")
        .and_then(|v| v.as_u64())
        .unwrap_or_default();
    let truncated = report
        .pointer("/data/truncated_reason")
        .is_some_and(|v| !v.is_null());
    if (findings.len() as u64) < total && !truncated {
        errors.push(format!(
            "fixture '{fixture}': {} of {total} findings emitted without a truncation reason",
            findings.len()
        ));
    }

    errors
}

/// Run the symguard binary over every fixture and validate the reports it writes.
fn conform() -> anyhow::Result<()> {
    let root = project_root()?;
    let schema = serde_json::to_value(generate_report_schema())?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile report schema: {}", e))?;

    let mut symguard_bin = root.join("target").join("debug").join("symguard");
    if cfg!(target_os = "windows") {
        symguard_bin.set_extension("exe");
    }
    if !symguard_bin.exists() {
        bail!(
            "symguard binary not found at {}.\n\
            Run `cargo build -p symguard-cli` first.",
            symguard_bin.display()
        );
    }

    let fixtures_dir = root.join("tests").join("fixtures");
    let mut errors = Vec::new();
    let mut fixture_count = 0;

    for entry in fs::read_dir(&fixtures_dir).context("Failed to read tests/fixtures/")? {
        let fixture_dir = entry?.path();
        if !fixture_dir.join("symguard.refs.json").exists() {
            continue;
        }
        let fixture = fixture_dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let temp_dir = tempfile::tempdir().context("Failed to create temp dir")?;
        let report_out = temp_dir.path().join("report.json");

        let output = std::process::Command::new(&symguard_bin)
            .arg("--repo-root")
            .arg(&fixture_dir)
            .arg("check")
            .arg("--report-out")
            .arg(&report_out)
            .output()
            .with_context(|| format!("Failed to run symguard on fixture '{}'", fixture))?;

        // 0 and 2 both mean a receipt was written for a completed check.
        if !matches!(output.status.code(), Some(0 | 2)) {
            errors.push(format!(
                "fixture '{}': symguard exited with {:?}: {}",
                fixture,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr)
            ));
            continue;
        }

        let content = fs::read_to_string(&report_out)
            .with_context(|| format!("fixture '{}': no report output generated", fixture))?;
        let report: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse report for fixture '{}'", fixture))?;

        for err in validator.iter_errors(&report) {
            errors.push(format!("fixture '{}': schema validation: {}", fixture, err));
        }
        errors.extend(report_hygiene(&fixture, &report));

        fixture_count += 1;
        println!("  ✓ fixture '{}' produced a report", fixture);
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ {} fixtures conform", fixture_count);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
