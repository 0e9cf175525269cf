use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use symguard_domain::{ModuleRule, SymbolRule};

/// `symguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SymguardConfigV1 {
    /// Optional schema string for tooling (`symguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// When to fail the check: `error` (default) or `warning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// How many findings to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,

    /// Skip units flagged or detected as generated code (default `true`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_generated: Option<bool>,

    /// Redistribution path segments stripped from module paths (default `["vendor"]`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_markers: Option<Vec<String>>,

    /// Unit path globs that are never evaluated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub packages: PackagesConfig,

    #[serde(default)]
    pub symbols: SymbolsConfig,

    /// Map of check_id -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,
}

/// Module rule set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PackagesConfig {
    /// `true`: only listed modules may be imported.
    #[serde(default)]
    pub allowlist: bool,

    #[serde(default)]
    pub rules: Vec<PackageRuleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PackageRuleConfig {
    /// Module path template, e.g. `go/{ast,parser}`.
    pub path: String,

    /// Replacement template expanding to as many items as `path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

/// Symbol rule set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SymbolsConfig {
    /// `true`: only listed symbols may be referenced.
    #[serde(default)]
    pub allowlist: bool,

    #[serde(default)]
    pub rules: Vec<SymbolRuleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SymbolRuleConfig {
    /// Exactly one module path.
    pub package: String,

    /// Short name template, e.g. `Print{,f,ln}`.
    pub names: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_package: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_names: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Override preset severity: `info`, `warning`, `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

impl From<&PackageRuleConfig> for ModuleRule {
    fn from(value: &PackageRuleConfig) -> Self {
        ModuleRule {
            path: value.path.clone(),
            replacement: value.replacement.clone(),
        }
    }
}

impl From<&SymbolRuleConfig> for SymbolRule {
    fn from(value: &SymbolRuleConfig) -> Self {
        SymbolRule {
            package: value.package.clone(),
            names: value.names.clone(),
            replacement_package: value.replacement_package.clone(),
            replacement_names: value.replacement_names.clone(),
        }
    }
}
