//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_IMPORTS_FORBIDDEN: &str = "imports.forbidden";
pub const CHECK_SYMBOLS_FORBIDDEN: &str = "symbols.forbidden";

// Codes: imports.forbidden
pub const CODE_FORBIDDEN_IMPORT: &str = "forbidden_import";
pub const CODE_REPLACEABLE_IMPORT: &str = "replaceable_import";

// Codes: symbols.forbidden
pub const CODE_FORBIDDEN_SYMBOL: &str = "forbidden_symbol";
pub const CODE_REPLACEABLE_SYMBOL: &str = "replaceable_symbol";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";

/// Every policy check the engine can emit, in evaluation order.
pub fn all_check_ids() -> &'static [&'static str] {
    &[CHECK_IMPORTS_FORBIDDEN, CHECK_SYMBOLS_FORBIDDEN]
}
