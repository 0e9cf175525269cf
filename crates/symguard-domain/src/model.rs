use symguard_types::{RepoPath, Span};

/// Every source unit the external inspector reported, in repository order.
#[derive(Clone, Debug, Default)]
pub struct ReferenceModel {
    pub repo_root: RepoPath,
    pub units: Vec<SourceUnit>,
}

#[derive(Clone, Debug, Default)]
pub struct SourceUnit {
    pub path: RepoPath,

    /// Whether the unit is machine-generated. Resolved by the repo layer; `false` when unknown.
    pub generated: bool,

    pub imports: Vec<ModuleReference>,
    pub symbols: Vec<SymbolReference>,
}

/// An import of another module by path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleReference {
    pub path: String,
    /// Covers the quoted path literal.
    pub span: Span,
}

/// A qualified use of `name` defined in `module`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolReference {
    pub module: String,
    pub name: String,
    pub span: Span,
}
