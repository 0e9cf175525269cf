//! Fuzz target for reference manifest parsing and generated-code detection.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_refs_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = symguard_repo::fuzz::parse_refs(text);
        let _ = symguard_repo::fuzz::detect_generated(text);
    }
});
