use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a reference finding.
///
/// Identity fields, joined with `|`:
/// - check_id
/// - code
/// - unit path (repo-relative)
/// - normalized subject (`module` or `module.Name`)
///
/// Spans are not part of the identity.
pub fn fingerprint_for_reference(
    check_id: &str,
    code: &str,
    unit_path: &str,
    subject: &str,
) -> String {
    let canonical = [check_id, code, unit_path, subject].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_hex() {
        let a = fingerprint_for_reference("imports.forbidden", "forbidden_import", "main.go", "x");
        let b = fingerprint_for_reference("imports.forbidden", "forbidden_import", "main.go", "x");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn fingerprint_depends_on_every_field() {
        let base = fingerprint_for_reference("c", "k", "p", "s");
        assert_ne!(base, fingerprint_for_reference("c2", "k", "p", "s"));
        assert_ne!(base, fingerprint_for_reference("c", "k2", "p", "s"));
        assert_ne!(base, fingerprint_for_reference("c", "k", "p2", "s"));
        assert_ne!(base, fingerprint_for_reference("c", "k", "p", "s2"));
    }
}
