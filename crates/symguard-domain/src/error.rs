//! Configuration errors.
//!
//! Every failure of the core is a configuration error raised while building a
//! [`crate::CompiledPolicy`]. Decisions themselves never fail.

use thiserror::Error;

/// A malformed template pattern.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("pattern is empty")]
    Empty,

    #[error("pattern {pattern:?} contains an empty element")]
    EmptyElement { pattern: String },

    #[error("pattern {pattern:?} contains an unclosed brace")]
    Unclosed { pattern: String },

    #[error("{segment:?} needs to be of form 'foo', 'foo/bar', 'foo.{{bar,boo}}', etc")]
    Malformed { segment: String },

    #[error("{segment:?} has an empty brace group")]
    EmptyGroup { segment: String },

    #[error("{segment:?} expands to an empty element")]
    EmptyExpansion { segment: String },

    #[error("pattern expands to {sources} element(s) but its replacement expands to {replacements}")]
    LengthMismatch { sources: usize, replacements: usize },
}

/// A contradiction between the symbol table and the package table.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Inconsistency {
    #[error("symbol {symbol} is allowlisted but its package {package} is not")]
    SymbolOutsideAllowedPackage { symbol: String, package: String },

    #[error("symbol {symbol} is replaced with {target} but package {package} is not allowlisted")]
    ReplacementOutsideAllowedPackage {
        symbol: String,
        target: String,
        package: String,
    },

    #[error("symbol {symbol} is allowlisted but its package {package} is forbidden")]
    AllowedSymbolInForbiddenPackage { symbol: String, package: String },

    #[error("symbol {symbol} is replaced with {target} but package {package} is forbidden")]
    ReplacementInForbiddenPackage {
        symbol: String,
        target: String,
        package: String,
    },

    #[error(
        "symbol {symbol} is replaced with {target} but its package {package} is replaced with {package_replacement}"
    )]
    ConflictingReplacement {
        symbol: String,
        target: String,
        package: String,
        package_replacement: String,
    },
}

/// Which rule set a rule belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleKind {
    Package,
    Symbol,
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleKind::Package => f.write_str("package"),
            RuleKind::Symbol => f.write_str("symbol"),
        }
    }
}

/// A configuration error. `rule` is always the offending rule in its original,
/// unexpanded form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("package rule {rule} is missing a path")]
    MissingPath { rule: String },

    #[error("symbol rule {rule} is missing a package path")]
    MissingPackage { rule: String },

    #[error("symbol rule {rule} must name exactly one package in `{field}`")]
    MultiplePackages { rule: String, field: &'static str },

    #[error("{kind} rule {rule} specifies a replacement, which is not allowed in allowlist mode")]
    ReplacementInAllowlist { kind: RuleKind, rule: String },

    #[error("{kind} rule {rule} contains an error in `{field}`: {source}")]
    Pattern {
        kind: RuleKind,
        rule: String,
        field: &'static str,
        #[source]
        source: TemplateError,
    },

    #[error(
        "{kind} rule {rule} has a mismatched number of replacement specifications ({sources} vs {replacements})"
    )]
    MismatchedReplacement {
        kind: RuleKind,
        rule: String,
        sources: usize,
        replacements: usize,
    },

    #[error("symbol rule {rule} contains an invalid symbol name {name:?}")]
    InvalidSymbolName { rule: String, name: String },

    #[error("symbol rule {rule} is inconsistent with the package rules: {source}")]
    Inconsistent {
        rule: String,
        #[source]
        source: Inconsistency,
    },
}
