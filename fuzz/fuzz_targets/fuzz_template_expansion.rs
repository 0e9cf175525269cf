//! Fuzz target for brace-template expansion.
//!
//! Goal: expansion should **never panic** on any input, and a successful
//! pair expansion always yields equal-length lists.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_template_expansion
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct TemplateInput {
    pattern: String,
    replacement: Option<String>,
}

fuzz_target!(|input: TemplateInput| {
    // Nested groups multiply; keep inputs small enough to stay fast.
    if input.pattern.len() > 128 || input.replacement.as_ref().is_some_and(|r| r.len() > 128) {
        return;
    }

    let _ = symguard_domain::template::expand(&input.pattern);

    if let Some(replacement) = input.replacement.as_deref() {
        if let Ok(pairs) = symguard_domain::template::expand_pair(&input.pattern, replacement) {
            let expanded = symguard_domain::template::expand(&input.pattern)
                .expect("pair expansion succeeded so the pattern expands");
            assert_eq!(pairs.len(), expanded.len());
        }
    }
});
