use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical repo-relative path of a source unit, used in findings and reports.
///
/// - always forward slashes (`/`)
/// - no leading `./`
/// - an empty input becomes `.`
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct RepoPath(String);

impl Default for RepoPath {
    fn default() -> Self {
        RepoPath::new(".")
    }
}

impl RepoPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while let Some(rest) = v.strip_prefix("./") {
            v = rest.to_string();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Re-apply normalization to a value that bypassed `new` (e.g. deserialized input).
    pub fn normalized(&self) -> Self {
        RepoPath::new(&self.0)
    }

    /// Resolve this path against a filesystem root.
    pub fn under(&self, root: &Utf8Path) -> Utf8PathBuf {
        root.join(&self.0)
    }
}

impl From<&Utf8Path> for RepoPath {
    fn from(value: &Utf8Path) -> Self {
        RepoPath::new(value.as_str())
    }
}

impl std::fmt::Display for RepoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_separators_and_leading_dot() {
        assert_eq!(RepoPath::new(".\\cmd\\main.go").as_str(), "cmd/main.go");
        assert_eq!(RepoPath::new("././pkg/a.go").as_str(), "pkg/a.go");
        assert_eq!(RepoPath::new("").as_str(), ".");
    }

    #[test]
    fn under_joins_root() {
        let p = RepoPath::new("pkg/a.go");
        assert_eq!(p.under(Utf8Path::new("/repo")).as_str(), "/repo/pkg/a.go");
    }
}
