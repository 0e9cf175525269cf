//! Raw (unexpanded) rules as the user wrote them.

use std::fmt;

/// Module rule: `path` may be any template; `replacement` must expand to the same length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuleRule {
    pub path: String,
    pub replacement: Option<String>,
}

impl ModuleRule {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            replacement: None,
        }
    }

    pub fn replaced_by(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }

    /// The replacement, treating an empty string as absent.
    pub fn replacement(&self) -> Option<&str> {
        self.replacement.as_deref().filter(|r| !r.is_empty())
    }
}

/// Symbol rule: one owning `package`, a `names` template, and an optional rewrite.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolRule {
    pub package: String,
    pub names: String,
    pub replacement_package: Option<String>,
    pub replacement_names: Option<String>,
}

impl SymbolRule {
    pub fn new(package: impl Into<String>, names: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            names: names.into(),
            replacement_package: None,
            replacement_names: None,
        }
    }

    pub fn moved_to(mut self, package: impl Into<String>) -> Self {
        self.replacement_package = Some(package.into());
        self
    }

    pub fn renamed_to(mut self, names: impl Into<String>) -> Self {
        self.replacement_names = Some(names.into());
        self
    }

    pub fn replacement_package(&self) -> Option<&str> {
        self.replacement_package.as_deref().filter(|p| !p.is_empty())
    }

    pub fn replacement_names(&self) -> Option<&str> {
        self.replacement_names.as_deref().filter(|n| !n.is_empty())
    }
}

/// Rules for one rule set plus its mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet<R> {
    /// `true`: rules list what is permitted, everything else is forbidden.
    pub allowlist: bool,
    pub rules: Vec<R>,
}

/// Both rule sets, as supplied once per run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSets {
    pub packages: RuleSet<ModuleRule>,
    pub symbols: RuleSet<SymbolRule>,
}

// Rules render in the same inline-table shape they are configured with, so errors
// point at what the user actually wrote.

impl fmt::Display for ModuleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ path = {:?}", self.path)?;
        if let Some(r) = self.replacement() {
            write!(f, ", replacement = {r:?}")?;
        }
        f.write_str(" }")
    }
}

impl fmt::Display for SymbolRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ package = {:?}, names = {:?}", self.package, self.names)?;
        if let Some(p) = self.replacement_package() {
            write!(f, ", replacement_package = {p:?}")?;
        }
        if let Some(n) = self.replacement_names() {
            write!(f, ", replacement_names = {n:?}")?;
        }
        f.write_str(" }")
    }
}
