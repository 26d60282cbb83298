use thiserror::Error;

/// Errors raised while loading or resolving a theme.
///
/// All of these point at a mismatch between the theme file and the token table,
/// so none of them are worth retrying.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown theme token `{token}`")]
    UnknownToken { token: String },

    #[error("color scale `{scale}` is not registered in the palette")]
    UnknownScale { scale: String },

    #[error("shade index {index} is out of range for a 10 step color scale")]
    ShadeOutOfRange { index: usize },

    #[error("could not parse theme: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ThemeError {
    pub(crate) fn unknown_scale(scale: impl Into<String>) -> Self {
        Self::UnknownScale {
            scale: scale.into(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("`{input}` is not a valid hex color")]
pub struct ColorParseError {
    input: String,
}

impl ColorParseError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
