use thiserror::Error;

use crate::SlotId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("slot `{slot}` doesn't define a span at any breakpoint")]
    UnresolvedSpan { slot: SlotId },

    #[error("a grid needs at least one column")]
    EmptyGrid,

    #[error(transparent)]
    Breakpoints(#[from] BreakpointError),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BreakpointError {
    #[error("breakpoint names can't be empty")]
    EmptyName,

    #[error("breakpoint `{name}` is declared more than once")]
    DuplicateName { name: String },

    #[error("breakpoint `{name}` needs a finite, non-negative boundary, got {min_width}")]
    InvalidBoundary { name: String, min_width: f32 },

    #[error("breakpoints `{lower}` and `{upper}` share the boundary {min_width}px")]
    SharedBoundary {
        lower: String,
        upper: String,
        min_width: f32,
    },

    #[error("the `base` breakpoint always starts at 0px, got {min_width}")]
    BaseBoundary { min_width: f32 },
}
