//! Rule normalization: expand templates into flat decision tables.

use crate::error::{ConfigError, RuleKind, TemplateError};
use crate::rules::{ModuleRule, RuleSets, SymbolRule};
use crate::table::RuleTable;
use crate::template::expand;

/// Normalized module and symbol tables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tables {
    pub modules: RuleTable,
    pub symbols: RuleTable,
}

/// Expand both rule sets. Fails on the first offending rule, in input order.
pub fn normalize(rules: &RuleSets) -> Result<Tables, ConfigError> {
    Ok(Tables {
        modules: normalize_module_rules(&rules.packages.rules, rules.packages.allowlist)?,
        symbols: normalize_symbol_rules(&rules.symbols.rules, rules.symbols.allowlist)?,
    })
}

pub fn normalize_module_rules(
    rules: &[ModuleRule],
    allowlist: bool,
) -> Result<RuleTable, ConfigError> {
    let mut table = RuleTable::new();

    for rule in rules {
        let display = rule.to_string();
        if rule.path.is_empty() {
            return Err(ConfigError::MissingPath { rule: display });
        }
        if allowlist && rule.replacement().is_some() {
            return Err(ConfigError::ReplacementInAllowlist {
                kind: RuleKind::Package,
                rule: display,
            });
        }

        let pairs = expand_aligned(
            RuleKind::Package,
            &display,
            ("path", &rule.path),
            ("replacement", rule.replacement()),
        )?;
        for (path, target) in pairs {
            table.insert(path, target, &display);
        }
    }

    Ok(table)
}

pub fn normalize_symbol_rules(
    rules: &[SymbolRule],
    allowlist: bool,
) -> Result<RuleTable, ConfigError> {
    let mut table = RuleTable::new();

    for rule in rules {
        let display = rule.to_string();
        if rule.package.is_empty() {
            return Err(ConfigError::MissingPackage { rule: display });
        }
        let package = single_package(&display, "package", &rule.package)?;
        let replacement_package = rule
            .replacement_package()
            .map(|p| single_package(&display, "replacement_package", p))
            .transpose()?;
        if allowlist && (rule.replacement_package().is_some() || rule.replacement_names().is_some())
        {
            return Err(ConfigError::ReplacementInAllowlist {
                kind: RuleKind::Symbol,
                rule: display,
            });
        }

        let pairs = expand_aligned(
            RuleKind::Symbol,
            &display,
            ("names", &rule.names),
            ("replacement_names", rule.replacement_names()),
        )?;

        // A rename without an explicit package stays in the source package.
        let target_package = match replacement_package.as_deref() {
            Some(p) => Some(p),
            None if rule.replacement_names().is_some() => Some(package.as_str()),
            None => None,
        };

        for (name, renamed) in pairs {
            for candidate in std::iter::once(&name).chain(renamed.as_ref()) {
                if !is_symbol_name(candidate) {
                    return Err(ConfigError::InvalidSymbolName {
                        rule: display,
                        name: candidate.clone(),
                    });
                }
            }

            let target = target_package.map(|pkg| {
                let target_name = renamed.as_deref().unwrap_or(&name);
                format!("{pkg}.{target_name}")
            });
            table.insert(format!("{package}.{name}"), target, &display);
        }
    }

    Ok(table)
}

/// Resolve a field that must name exactly one module path.
fn single_package(rule: &str, field: &'static str, value: &str) -> Result<String, ConfigError> {
    let mut expanded = expand(value).map_err(|source| ConfigError::Pattern {
        kind: RuleKind::Symbol,
        rule: rule.to_string(),
        field,
        source,
    })?;
    match expanded.pop() {
        Some(package) if expanded.is_empty() => Ok(package),
        _ => Err(ConfigError::MultiplePackages {
            rule: rule.to_string(),
            field,
        }),
    }
}

/// Short names must not contain path separators, or the final-`.` split breaks.
fn is_symbol_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['.', '/'])
}

/// Expand `source` and, when present, `replacement` with positional correspondence.
fn expand_aligned(
    kind: RuleKind,
    rule: &str,
    (source_field, source): (&'static str, &str),
    (replacement_field, replacement): (&'static str, Option<&str>),
) -> Result<Vec<(String, Option<String>)>, ConfigError> {
    let pattern_error = |field: &'static str, source: TemplateError| ConfigError::Pattern {
        kind,
        rule: rule.to_string(),
        field,
        source,
    };

    let sources = expand(source).map_err(|e| pattern_error(source_field, e))?;
    let Some(replacement) = replacement else {
        return Ok(sources.into_iter().map(|s| (s, None)).collect());
    };

    let replacements = expand(replacement).map_err(|e| pattern_error(replacement_field, e))?;
    if replacements.len() != sources.len() {
        return Err(ConfigError::MismatchedReplacement {
            kind,
            rule: rule.to_string(),
            sources: sources.len(),
            replacements: replacements.len(),
        });
    }
    Ok(sources
        .into_iter()
        .zip(replacements.into_iter().map(Some))
        .collect())
}
