use anyhow::Context;
use symguard_render::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use symguard_types::{
    Finding, SCHEMA_REPORT_V1, Severity, SymguardData, SymguardReport, ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<SymguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse symguard report")
}

pub fn serialize_report(report: &SymguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &SymguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            profile: report.data.profile.clone(),
            units_scanned: report.data.units_scanned,
            units_skipped: report.data.units_skipped,
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: f.check_id.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        location: f.location.as_ref().map(|loc| RenderableLocation {
            path: loc.path.as_str().to_string(),
            line: loc.line,
            col: loc.col,
        }),
        help: f.help.clone(),
        replacement: f
            .data
            .get("replacement")
            .and_then(|v| v.as_str())
            .map(str::to_string),
    }
}

/// A failing receipt describing why the check could not run.
pub fn runtime_error_report(message: &str) -> SymguardReport {
    let now = OffsetDateTime::now_utc();
    SymguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "symguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Fix the tool error and re-run symguard.".to_string()),
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: SymguardData {
            profile: "unknown".to_string(),
            findings_total: 1,
            findings_emitted: 1,
            ..SymguardData::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_error_report_round_trips() {
        let report = runtime_error_report("boom");
        let bytes = serialize_report(&report).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        let parsed = parse_report_json(&text).expect("parse");

        assert_eq!(parsed.verdict, Verdict::Fail);
        assert_eq!(parsed.findings[0].check_id, ids::CHECK_TOOL_RUNTIME);
        assert_eq!(parsed.findings[0].message, "boom");
    }

    #[test]
    fn rejects_foreign_schema() {
        let err = parse_report_json(r#"{"schema": "other.report.v9"}"#).expect_err("schema");
        assert!(err.to_string().contains("other.report.v9"));
        assert!(parse_report_json("not json").is_err());
    }

    #[test]
    fn renderable_picks_up_replacement() {
        let mut report = runtime_error_report("x");
        report.findings[0].data = serde_json::json!({"replacement": "pkg/new"});
        let renderable = to_renderable(&report);
        assert_eq!(
            renderable.findings[0].replacement.as_deref(),
            Some("pkg/new")
        );
        assert_eq!(renderable.verdict, RenderableVerdictStatus::Fail);
    }
}
