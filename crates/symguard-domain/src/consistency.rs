//! Cross-validation between the module table and the symbol table.

use crate::compiled::Modes;
use crate::error::{ConfigError, Inconsistency};
use crate::normalize::Tables;
use crate::table::split_symbol;

/// Return the first contradiction between the two tables under `modes`.
///
/// Symbols are visited in key order, so the reported violation is stable.
pub fn check(tables: &Tables, modes: Modes) -> Result<(), ConfigError> {
    let modules = &tables.modules;

    for (symbol, entry) in tables.symbols.iter() {
        let Some((source_module, _)) = split_symbol(symbol) else {
            continue;
        };
        let target = entry.replacement.as_deref();
        let target_module = target.and_then(split_symbol).map(|(m, _)| m);

        let violation = match (modes.packages_allowlist, modes.symbols_allowlist) {
            (true, true) if !modules.contains(source_module) => {
                Some(Inconsistency::SymbolOutsideAllowedPackage {
                    symbol: symbol.to_string(),
                    package: source_module.to_string(),
                })
            }
            (true, false) => match (target, target_module) {
                (Some(target), Some(package)) if !modules.contains(package) => {
                    Some(Inconsistency::ReplacementOutsideAllowedPackage {
                        symbol: symbol.to_string(),
                        target: target.to_string(),
                        package: package.to_string(),
                    })
                }
                _ => None,
            },
            (false, true) if modules.contains(source_module) => {
                Some(Inconsistency::AllowedSymbolInForbiddenPackage {
                    symbol: symbol.to_string(),
                    package: source_module.to_string(),
                })
            }
            (false, false) => deny_mode_violation(tables, symbol, source_module, target),
            _ => None,
        };

        if let Some(source) = violation {
            return Err(ConfigError::Inconsistent {
                rule: entry.rule.clone(),
                source,
            });
        }
    }

    Ok(())
}

fn deny_mode_violation(
    tables: &Tables,
    symbol: &str,
    source_module: &str,
    target: Option<&str>,
) -> Option<Inconsistency> {
    let target = target?;
    let (target_module, _) = split_symbol(target)?;

    if tables.modules.contains(target_module) {
        return Some(Inconsistency::ReplacementInForbiddenPackage {
            symbol: symbol.to_string(),
            target: target.to_string(),
            package: target_module.to_string(),
        });
    }

    match tables.modules.replacement(source_module) {
        Some(package_replacement) if package_replacement != target_module => {
            Some(Inconsistency::ConflictingReplacement {
                symbol: symbol.to_string(),
                target: target.to_string(),
                package: source_module.to_string(),
                package_replacement: package_replacement.to_string(),
            })
        }
        _ => None,
    }
}
