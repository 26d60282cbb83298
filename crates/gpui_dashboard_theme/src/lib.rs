//! Palette model and semantic token resolution for the dashboard theme.
//!
//! A [`ThemeConfig`] is loaded once (usually from JSON) and shared by reference.
//! Tokens such as `primary` or `surface` resolve to a shade of a registered
//! [`ColorScale`] through a fixed per-mode index table, and the whole token set can
//! be exported as CSS custom properties.

mod color;
pub use color::*;

mod deserializers;

mod error;
pub use error::*;

mod resolver;
pub use resolver::*;

mod schema;
pub use schema::*;

mod tokens;
pub use tokens::*;
