//! Pure policy evaluation (no IO).
//!
//! Input: raw module/symbol rules plus a reference model constructed elsewhere.
//! Output: a compiled, read-only policy, per-reference decisions, and findings + verdict.
//!
//! The pipeline is strictly ordered: [`template`] expansion feeds [`normalize`], the
//! resulting tables pass [`consistency`] checking, and only then does a [`CompiledPolicy`]
//! exist to answer [`decide`] queries. Configuration errors surface before any reference
//! is looked at.

#![forbid(unsafe_code)]

pub mod checks;
pub mod compiled;
pub mod consistency;
pub mod decide;
pub mod error;
pub mod fingerprint;
pub mod model;
pub mod normalize;
pub mod policy;
pub mod report;
pub mod rules;
pub mod table;
pub mod template;
pub mod vendor;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use compiled::{CompiledPolicy, Modes};
pub use decide::{Decision, Diagnostic, TextEdit, Verdict};
pub use engine::evaluate;
pub use error::{ConfigError, Inconsistency, TemplateError};
pub use rules::{ModuleRule, RuleSets, SymbolRule};
pub use table::{RuleTable, TableEntry};
