//! Use case orchestration for symguard.
//!
//! This crate provides the application layer: use cases that coordinate the domain, repo,
//! settings, and render layers. It is intentionally thin and delegates heavy lifting to the
//! appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod inspect;
mod render;
mod report;

pub use check::{CheckInput, CheckOutput, load_config, run_check, verdict_exit_code};
pub use inspect::{ExpandOutput, run_expand, run_tables};
pub use render::{render_annotations, render_markdown};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
