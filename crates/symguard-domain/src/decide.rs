//! Decision engine: per-reference verdicts and diagnostics.
//!
//! Queries never fail and never mutate the policy.

use crate::compiled::CompiledPolicy;
use crate::model::{ModuleReference, SymbolReference};
use crate::table::RuleTable;
use crate::vendor::strip_vendor_prefix;
use serde::Serialize;
use symguard_types::Span;

/// Outcome for one reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    /// `replacement: None` means forbidden outright, with no rewrite target.
    Forbidden { replacement: Option<String> },
}

/// A verdict together with the normalized identifier it was reached for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    /// Module path or `module.Name`, after vendoring-prefix stripping.
    pub subject: String,
    pub verdict: Verdict,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        self.verdict == Verdict::Allowed
    }

    pub fn replacement(&self) -> Option<&str> {
        match &self.verdict {
            Verdict::Forbidden { replacement } => replacement.as_deref(),
            Verdict::Allowed => None,
        }
    }

    /// Human-readable message, `None` when allowed.
    pub fn message(&self) -> Option<String> {
        match &self.verdict {
            Verdict::Allowed => None,
            Verdict::Forbidden { replacement: None } => {
                Some(format!("{} should not be used", self.subject))
            }
            Verdict::Forbidden {
                replacement: Some(r),
            } => Some(format!("{} should be replaced with {}", self.subject, r)),
        }
    }
}

/// A proposed single-span text substitution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextEdit {
    pub span: Span,
    pub new_text: String,
    pub message: String,
}

/// What the caller forwards to its reporting sink for a forbidden reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub span: Span,
    pub message: String,
    pub decision: Decision,
    pub suggested_edit: Option<TextEdit>,
}

impl CompiledPolicy {
    /// Decide an imported module path.
    pub fn decide_module(&self, path: &str) -> Decision {
        let subject = strip_vendor_prefix(path, self.vendor_markers()).to_string();
        let verdict = lookup(self.modules(), &subject, self.modes().packages_allowlist);
        Decision { subject, verdict }
    }

    /// Decide a qualified reference to `name` defined in `module`.
    pub fn decide_symbol(&self, module: &str, name: &str) -> Decision {
        let module = strip_vendor_prefix(module, self.vendor_markers());
        let subject = format!("{module}.{name}");
        let verdict = lookup(self.symbols(), &subject, self.modes().symbols_allowlist);
        Decision { subject, verdict }
    }

    /// Diagnostic for an import, with a text edit when a replacement module is known.
    ///
    /// The edit rewrites the quoted path literal, so its text is quoted too.
    pub fn check_module(&self, reference: &ModuleReference) -> Option<Diagnostic> {
        let decision = self.decide_module(&reference.path);
        let message = decision.message()?;
        let suggested_edit = decision.replacement().map(|replacement| TextEdit {
            span: reference.span,
            new_text: format!("\"{replacement}\""),
            message: format!(
                "Replace import of {} with {}",
                decision.subject, replacement
            ),
        });
        Some(Diagnostic {
            span: reference.span,
            message,
            decision,
            suggested_edit,
        })
    }

    /// Diagnostic for a symbol use. Never carries an edit: the call site itself, not
    /// only the import, would have to change.
    pub fn check_symbol(&self, reference: &SymbolReference) -> Option<Diagnostic> {
        let decision = self.decide_symbol(&reference.module, &reference.name);
        let message = decision.message()?;
        Some(Diagnostic {
            span: reference.span,
            message,
            decision,
            suggested_edit: None,
        })
    }
}

fn lookup(table: &RuleTable, key: &str, allowlist: bool) -> Verdict {
    match (table.get(key), allowlist) {
        (Some(_), true) => Verdict::Allowed,
        (None, true) => Verdict::Forbidden { replacement: None },
        (None, false) => Verdict::Allowed,
        (Some(entry), false) => Verdict::Forbidden {
            replacement: entry.replacement.clone(),
        },
    }
}
