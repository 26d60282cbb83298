//! Theme system providing the palette, semantic color tokens and CSS variables.
//!
//! Themes carry a light and a dark resolution of the same token set; the
//! [`ThemeConfig`] itself never changes once loaded.

pub use gpui_dashboard_theme::*;

#[cfg(feature = "gpui")]
mod ext;
#[cfg(feature = "gpui")]
pub use ext::*;
