use crate::consistency;
use crate::error::ConfigError;
use crate::normalize::{Tables, normalize};
use crate::rules::RuleSets;
use crate::table::RuleTable;
use crate::vendor::DEFAULT_VENDOR_MARKER;

/// Allow/deny mode of each rule set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modes {
    pub packages_allowlist: bool,
    pub symbols_allowlist: bool,
}

/// A validated, read-only policy.
///
/// Built once per run and shared by reference (it is `Send + Sync`); every decision is a
/// pure lookup against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledPolicy {
    tables: Tables,
    modes: Modes,
    vendor_markers: Vec<String>,
}

impl Default for CompiledPolicy {
    fn default() -> Self {
        Self {
            tables: Tables::default(),
            modes: Modes::default(),
            vendor_markers: vec![DEFAULT_VENDOR_MARKER.to_string()],
        }
    }
}

impl CompiledPolicy {
    /// Normalize and cross-check `rules`. Nothing can be decided against a configuration
    /// that fails here.
    pub fn compile(rules: &RuleSets) -> Result<Self, ConfigError> {
        let modes = Modes {
            packages_allowlist: rules.packages.allowlist,
            symbols_allowlist: rules.symbols.allowlist,
        };
        let tables = normalize(rules)?;
        consistency::check(&tables, modes)?;

        tracing::debug!(
            modules = tables.modules.len(),
            symbols = tables.symbols.len(),
            packages_allowlist = modes.packages_allowlist,
            symbols_allowlist = modes.symbols_allowlist,
            "compiled rule tables"
        );

        Ok(Self {
            tables,
            modes,
            ..Self::default()
        })
    }

    /// Replace the redistribution markers stripped from module paths before lookup.
    pub fn with_vendor_markers(mut self, markers: Vec<String>) -> Self {
        self.vendor_markers = markers;
        self
    }

    pub fn modules(&self) -> &RuleTable {
        &self.tables.modules
    }

    pub fn symbols(&self) -> &RuleTable {
        &self.tables.symbols
    }

    pub fn modes(&self) -> Modes {
        self.modes
    }

    pub fn vendor_markers(&self) -> &[String] {
        &self.vendor_markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{ModuleRule, RuleSet, SymbolRule};

    #[test]
    fn compile_rejects_inconsistent_rules() {
        let rules = RuleSets {
            packages: RuleSet {
                allowlist: false,
                rules: vec![ModuleRule::new("pkg").replaced_by("different/target")],
            },
            symbols: RuleSet {
                allowlist: false,
                rules: vec![SymbolRule::new("pkg", "Foo").moved_to("other").renamed_to("Bar")],
            },
        };
        assert!(matches!(
            CompiledPolicy::compile(&rules),
            Err(ConfigError::Inconsistent { .. })
        ));
    }

    #[test]
    fn compile_rejects_allowlisted_symbol_outside_allowlisted_packages() {
        let rules = RuleSets {
            packages: RuleSet {
                allowlist: true,
                rules: vec![ModuleRule::new("other")],
            },
            symbols: RuleSet {
                allowlist: true,
                rules: vec![SymbolRule::new("pkg", "Foo")],
            },
        };
        assert!(CompiledPolicy::compile(&rules).is_err());
    }

    #[test]
    fn empty_rules_compile() {
        let policy = CompiledPolicy::compile(&RuleSets::default()).expect("compile");
        assert!(policy.modules().is_empty());
        assert!(policy.symbols().is_empty());
        assert_eq!(policy.vendor_markers(), ["vendor".to_string()]);
    }

    #[test]
    fn policy_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompiledPolicy>();
    }
}
