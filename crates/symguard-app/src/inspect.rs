//! Read-only inspection use cases: template expansion and normalized rule tables.

use anyhow::Context;
use serde_json::{Map, Value, json};
use symguard_domain::RuleTable;
use symguard_domain::template::{expand, expand_pair};
use symguard_settings::Overrides;

/// Expansion of one template, optionally paired with its replacement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpandOutput {
    Items(Vec<String>),
    Pairs(Vec<(String, String)>),
}

impl ExpandOutput {
    /// One line per item; pairs as `source -> replacement`.
    pub fn lines(&self) -> Vec<String> {
        match self {
            ExpandOutput::Items(items) => items.clone(),
            ExpandOutput::Pairs(pairs) => pairs
                .iter()
                .map(|(source, replacement)| format!("{source} -> {replacement}"))
                .collect(),
        }
    }
}

pub fn run_expand(pattern: &str, replacement: Option<&str>) -> anyhow::Result<ExpandOutput> {
    match replacement {
        Some(replacement) => expand_pair(pattern, replacement)
            .map(ExpandOutput::Pairs)
            .with_context(|| format!("expand {pattern:?} with {replacement:?}")),
        None => expand(pattern)
            .map(ExpandOutput::Items)
            .with_context(|| format!("expand {pattern:?}")),
    }
}

/// Resolve the configuration and return its normalized tables as JSON.
pub fn run_tables(config_text: &str, overrides: Overrides) -> anyhow::Result<Value> {
    let cfg = crate::load_config(config_text)?;
    let resolved = symguard_settings::resolve_config(cfg, overrides).context("resolve config")?;
    let rules = &resolved.effective.rules;
    let modes = rules.modes();

    Ok(json!({
        "packages": {
            "allowlist": modes.packages_allowlist,
            "entries": table_json(rules.modules()),
        },
        "symbols": {
            "allowlist": modes.symbols_allowlist,
            "entries": table_json(rules.symbols()),
        },
        "vendor_markers": rules.vendor_markers(),
    }))
}

fn table_json(table: &RuleTable) -> Value {
    let entries: Map<String, Value> = table
        .iter()
        .map(|(key, entry)| (key.to_string(), json!(entry.replacement)))
        .collect();
    Value::Object(entries)
}
