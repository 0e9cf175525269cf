use crate::decide::{Decision, TextEdit};
use crate::model::SourceUnit;
use crate::policy::EffectiveConfig;
use serde_json::{Value, json};
use symguard_types::{Location, Span};

/// Whether `unit` is evaluated at all under `cfg`.
pub fn in_scope(unit: &SourceUnit, cfg: &EffectiveConfig) -> bool {
    if cfg.skip_generated && unit.generated {
        return false;
    }
    !cfg.exclude.is_match(unit.path.as_str())
}

pub fn location(unit: &SourceUnit, span: Span) -> Location {
    Location {
        path: unit.path.clone(),
        line: Some(span.start.line),
        col: Some(span.start.col),
        end: Some(span.end),
    }
}

pub fn mode_label(allowlist: bool) -> &'static str {
    if allowlist { "allowlist" } else { "denylist" }
}

pub fn finding_data(decision: &Decision, allowlist: bool, fix: Option<&TextEdit>) -> Value {
    let mut data = json!({
        "subject": decision.subject,
        "mode": mode_label(allowlist),
    });
    if let Some(replacement) = decision.replacement() {
        data["replacement"] = json!(replacement);
    }
    if let Some(fix) = fix {
        data["fix"] = json!(fix);
    }
    data
}
