//! Breakpoint driven placement of dashboard slots.
//!
//! Every viewport change runs the same pure pass: classify the width into a
//! breakpoint, resolve each slot's span and order with cascading fallback, then
//! flow the slots into rows of a column [`Grid`].

mod breakpoints;
pub use breakpoints::*;

mod error;
pub use error::*;

mod grid;
pub use grid::*;

mod responsive;
pub use responsive::*;

mod slot;
pub use slot::*;

mod viewport;
pub use viewport::*;
