//! Redistribution prefixes.
//!
//! A module copied into a vendoring directory (`example.com/app/vendor/pkg/foo`) is the
//! same logical module as `pkg/foo`, so rules written against the bare path apply.

/// Marker used when the configuration does not name any.
pub const DEFAULT_VENDOR_MARKER: &str = "vendor";

/// Strip everything up to and including the last `<marker>/` path segment.
///
/// Only whole segments count: `myvendor/pkg` is left alone, and a path that *starts*
/// with the marker keeps it (there is no prefix to strip).
pub fn strip_vendor_prefix<'a>(path: &'a str, markers: &[String]) -> &'a str {
    let mut cut: Option<usize> = None;

    for marker in markers.iter().filter(|m| !m.is_empty()) {
        let needle = format!("/{marker}/");
        if let Some(idx) = path.rfind(&needle) {
            let end = idx + needle.len();
            cut = Some(cut.map_or(end, |c| c.max(end)));
        }
    }

    match cut {
        Some(end) if end < path.len() => &path[end..],
        _ => path,
    }
}
