use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A 1-based line/column position inside a source unit.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
pub struct Position {
    pub line: u32,
    pub col: u32,
}

/// Half-open source range reported by the external inspector.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: (u32, u32), end: (u32, u32)) -> Self {
        Self {
            start: Position {
                line: start.0,
                col: start.1,
            },
            end: Position {
                line: end.0,
                col: end.1,
            },
        }
    }
}
