//! Rendering utilities for CI surfaces (Markdown, GitHub annotations).
//!
//! Renderers take a [`RenderableReport`], a flat view that the app layer builds from a
//! receipt, so this crate does not depend on the receipt types.

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
