use thiserror::Error;

use crate::{layout::LayoutError, theme::ThemeError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}
