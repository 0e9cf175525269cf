//! Fuzz target for `symguard.toml` parsing and rule compilation.
//!
//! Goal: parsing and resolving should **never panic** on any input.
//! Invalid configs must surface as errors.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 4096 {
        return;
    }

    if let Ok(cfg) = symguard_settings::parse_config_toml(text) {
        let _ = symguard_settings::resolve_config(cfg, Default::default());
    }
});
