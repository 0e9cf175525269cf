use serde::{Deserialize, Serialize};
use symguard_domain::model::{ModuleReference, SourceUnit, SymbolReference};
use symguard_types::{RepoPath, Span};

/// `symguard.refs.json`: every reference the external inspector found, per source unit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RefsManifest {
    #[serde(default)]
    pub units: Vec<UnitEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitEntry {
    pub path: RepoPath,

    /// Absent means "detect from the file".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated: Option<bool>,

    #[serde(default)]
    pub imports: Vec<ImportEntry>,

    #[serde(default)]
    pub symbols: Vec<SymbolEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportEntry {
    pub path: String,
    #[serde(default)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub module: String,
    pub name: String,
    #[serde(default)]
    pub span: Span,
}

/// A unit plus whether its `generated` flag still needs to be detected.
pub(crate) struct PendingUnit {
    pub unit: SourceUnit,
    pub detect: bool,
}

impl RefsManifest {
    pub(crate) fn into_units(self) -> Vec<PendingUnit> {
        self.units
            .into_iter()
            .map(|entry| PendingUnit {
                detect: entry.generated.is_none(),
                unit: SourceUnit {
                    path: entry.path.normalized(),
                    generated: entry.generated.unwrap_or(false),
                    imports: entry
                        .imports
                        .into_iter()
                        .map(|i| ModuleReference {
                            path: i.path,
                            span: i.span,
                        })
                        .collect(),
                    symbols: entry
                        .symbols
                        .into_iter()
                        .map(|s| SymbolReference {
                            module: s.module,
                            name: s.name,
                            span: s.span,
                        })
                        .collect(),
                },
            })
            .collect()
    }
}

pub(crate) fn parse_refs(text: &str) -> anyhow::Result<RefsManifest> {
    Ok(serde_json::from_str(text)?)
}
