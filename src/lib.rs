pub mod dashboard;

pub mod layout;

pub mod theme;

mod error;
pub use error::*;

#[cfg(feature = "gpui")]
mod utils;
#[cfg(feature = "gpui")]
pub use utils::*;

#[cfg(feature = "gpui")]
mod init;
#[cfg(feature = "gpui")]
pub use init::*;
