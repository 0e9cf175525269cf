//! Stable DTOs and IDs used across the symguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted receipt
//! - stable string IDs and codes
//! - canonical repo-relative paths and source spans

#![forbid(unsafe_code)]

pub mod ids;
pub mod path;
pub mod receipt;
pub mod span;

pub use path::RepoPath;
pub use receipt::{
    Finding, Location, ReportEnvelope, SCHEMA_REPORT_V1, Severity, SymguardData, SymguardReport,
    ToolMeta, Verdict,
};
pub use span::{Position, Span};
