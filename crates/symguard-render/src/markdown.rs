use crate::{RenderableFinding, RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Symguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    let data = &report.data;
    out.push_str(&format!(
        "- Verdict: **{}**\n- Profile: `{}`\n- Units: {} scanned, {} skipped\n- Findings: {} (emitted) / {} (total)\n\n",
        verdict,
        data.profile,
        data.units_scanned,
        data.units_skipped,
        data.findings_emitted,
        data.findings_total
    ));

    if let Some(r) = &data.truncated_reason {
        out.push_str(&format!("> Note: {r}\n\n"));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");
    out.push_str("| Severity | Location | Check | Message | Replacement |\n");
    out.push_str("|---|---|---|---|---|\n");

    for f in &report.findings {
        out.push_str(&format!(
            "| {} | {} | `{}:{}` | {} | {} |\n",
            severity_label(f.severity),
            location_cell(f),
            f.check_id,
            f.code,
            escape_cell(&f.message),
            f.replacement
                .as_deref()
                .map(|r| format!("`{r}`"))
                .unwrap_or_default(),
        ));
    }

    let mut help: Vec<&str> = report
        .findings
        .iter()
        .filter_map(|f| f.help.as_deref())
        .collect();
    if !help.is_empty() {
        help.sort_unstable();
        help.dedup();
        out.push_str("\n### Help\n\n");
        for h in help {
            out.push_str(&format!("- {h}\n"));
        }
    }

    out
}

fn severity_label(severity: RenderableSeverity) -> &'static str {
    match severity {
        RenderableSeverity::Info => "INFO",
        RenderableSeverity::Warning => "WARN",
        RenderableSeverity::Error => "ERROR",
    }
}

fn location_cell(f: &RenderableFinding) -> String {
    match &f.location {
        Some(loc) => match (loc.line, loc.col) {
            (Some(line), Some(col)) => format!("`{}:{}:{}`", loc.path, line, col),
            (Some(line), None) => format!("`{}:{}`", loc.path, line),
            _ => format!("`{}`", loc.path),
        },
        None => String::new(),
    }
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace(['\r', '\n'], " ")
}
