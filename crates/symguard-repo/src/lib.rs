//! Repository adapters: load the reference manifest and classify source units.
//!
//! This crate is allowed to do filesystem IO. It does not parse source code and does not
//! spawn external processes; the references are produced by an external inspector and
//! handed over as `symguard.refs.json`.

#![forbid(unsafe_code)]

mod generated;
mod refs;

use anyhow::Context;
use camino::Utf8Path;
use symguard_domain::model::ReferenceModel;
use symguard_types::RepoPath;

pub use generated::is_generated_source;
pub use refs::{ImportEntry, RefsManifest, SymbolEntry, UnitEntry};

/// Default location of the reference manifest, relative to the repository root.
pub const DEFAULT_REFS_FILE: &str = "symguard.refs.json";

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    /// Parse arbitrary text as a reference manifest.
    ///
    /// **Never panics** on any input.
    pub fn parse_refs(text: &str) -> anyhow::Result<()> {
        let _ = super::refs::parse_refs(text)?;
        Ok(())
    }

    /// Run generated-code detection on arbitrary text. **Never panics** on any input.
    pub fn detect_generated(text: &str) -> bool {
        super::generated::is_generated_source(text)
    }
}

/// Build the in-memory reference model used by the policy engine.
///
/// `refs` defaults to [`DEFAULT_REFS_FILE`] under `repo_root`. Units whose `generated` flag
/// is absent are classified from their source file, when it exists under `repo_root`.
pub fn build_reference_model(
    repo_root: &Utf8Path,
    refs: Option<&Utf8Path>,
) -> anyhow::Result<ReferenceModel> {
    let refs_path = match refs {
        Some(p) => p.to_path_buf(),
        None => repo_root.join(DEFAULT_REFS_FILE),
    };
    let text =
        std::fs::read_to_string(&refs_path).with_context(|| format!("read {}", refs_path))?;
    let manifest = refs::parse_refs(&text).with_context(|| format!("parse {}", refs_path))?;

    let mut units = manifest.into_units();
    generated::classify_units(repo_root, &mut units).context("detect generated units")?;
    units.sort_by(|a, b| a.unit.path.cmp(&b.unit.path));

    tracing::debug!(units = units.len(), refs = %refs_path, "loaded reference manifest");

    Ok(ReferenceModel {
        repo_root: RepoPath::from(repo_root),
        units: units.into_iter().map(|u| u.unit).collect(),
    })
}
