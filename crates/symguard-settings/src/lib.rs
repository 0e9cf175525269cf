//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.
//! Resolution also compiles the rule sets, so a [`ResolvedConfig`] only exists for a
//! configuration whose rules expand cleanly and agree with each other.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{
    CheckConfig, PackageRuleConfig, PackagesConfig, SymbolRuleConfig, SymbolsConfig,
    SymguardConfigV1,
};
pub use resolve::{Overrides, ResolvedConfig};

/// Schema identifier accepted in the optional `schema` key.
pub const SCHEMA_CONFIG_V1: &str = "symguard.config.v1";

/// Parse `symguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<SymguardConfigV1> {
    let cfg: SymguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (profiles + overrides + per-check config
/// + compiled rules).
pub fn resolve_config(
    cfg: SymguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
