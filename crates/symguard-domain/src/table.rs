use std::collections::BTreeMap;

/// One normalized rule entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableEntry {
    /// Designated rewrite target; `None` means a bare verdict.
    pub replacement: Option<String>,
    /// The rule that produced this entry, in its original form.
    pub rule: String,
}

/// A flat, ordered decision table keyed by module path or fully-qualified symbol.
///
/// Ordered so that two normalizations of the same rules compare and iterate identically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleTable(BTreeMap<String, TableEntry>);

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins.
    pub fn insert(&mut self, key: String, replacement: Option<String>, rule: &str) {
        self.0.insert(
            key,
            TableEntry {
                replacement,
                rule: rule.to_string(),
            },
        );
    }

    pub fn get(&self, key: &str) -> Option<&TableEntry> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The replacement registered for `key`, if the key exists and carries one.
    pub fn replacement(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|e| e.replacement.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TableEntry)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Plain `key -> replacement` view, without provenance.
    pub fn to_map(&self) -> BTreeMap<String, Option<String>> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.replacement.clone()))
            .collect()
    }
}

/// Split a fully-qualified symbol at its final `.` into `(module, name)`.
pub fn split_symbol(symbol: &str) -> Option<(&str, &str)> {
    symbol.rsplit_once('.')
}
