//! Responsive layout: breakpoints, spans and grid placement.

pub use gpui_dashboard_layout::*;

#[cfg(feature = "gpui")]
mod ext;
#[cfg(feature = "gpui")]
pub use ext::*;
