use crate::refs::PendingUnit;
use anyhow::Context;
use camino::Utf8Path;
use rayon::prelude::*;

const MARKER_PREFIX: &str = "// Code generated ";
const MARKER_SUFFIX: &str = " DO NOT EDIT.";

/// Whether `text` carries the conventional generated-code marker in its leading comments.
///
/// Line and block comments before the first other text (normally the `package` clause) are
/// scanned. The marker itself must be a whole `//` line.
pub fn is_generated_source(text: &str) -> bool {
    let mut in_block = false;

    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        let trimmed = line.trim();

        if in_block {
            in_block = !trimmed.contains("*/");
            continue;
        }
        if trimmed.is_empty() {
            continue;
        }
        if line.starts_with(MARKER_PREFIX) && line.ends_with(MARKER_SUFFIX) {
            return true;
        }
        if trimmed.starts_with("//") {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("/*") {
            in_block = !rest.contains("*/");
            continue;
        }
        return false;
    }
    false
}

/// Fill in `generated` for units that did not say, reading files in parallel.
///
/// A unit whose file does not exist under `repo_root` is treated as hand-written.
pub(crate) fn classify_units(repo_root: &Utf8Path, units: &mut [PendingUnit]) -> anyhow::Result<()> {
    units
        .par_iter_mut()
        .filter(|u| u.detect)
        .try_for_each(|pending| -> anyhow::Result<()> {
            let abs = pending.unit.path.under(repo_root);
            match std::fs::read_to_string(&abs) {
                Ok(text) => {
                    pending.unit.generated = is_generated_source(&text);
                    Ok(())
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!(path = %abs, "unit source not found; assuming hand-written");
                    Ok(())
                }
                Err(e) => Err(e).with_context(|| format!("read {}", abs)),
            }
        })
}
