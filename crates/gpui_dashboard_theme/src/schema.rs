use std::{ops::Deref, sync::LazyLock};

use enum_assoc::Assoc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    ColorValue, SemanticToken, ThemeError,
    deserializers::{de_color_scale, de_non_empty_string, de_palette},
};

/// Number of shades in every [`ColorScale`].
pub const SCALE_LEN: usize = 10;

/// Prefix used for generated CSS custom properties when a theme doesn't set one.
pub const DEFAULT_VARIABLE_PREFIX: &str = "dashboard";

/// Ten shades of one hue, index 0 lightest through 9 darkest.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct ColorScale {
    #[serde(deserialize_with = "de_color_scale")]
    shades: [ColorValue; SCALE_LEN],
}

impl ColorScale {
    pub const fn new(shades: [ColorValue; SCALE_LEN]) -> Self {
        Self { shades }
    }

    pub fn shade(&self, index: usize) -> Result<ColorValue, ThemeError> {
        self.shades
            .get(index)
            .copied()
            .ok_or(ThemeError::ShadeOutOfRange { index })
    }

    pub fn shades(&self) -> &[ColorValue; SCALE_LEN] {
        &self.shades
    }
}

/// Named color scales, kept in declaration order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct PaletteRegistry {
    #[serde(deserialize_with = "de_palette")]
    scales: IndexMap<String, ColorScale>,
}

impl PaletteRegistry {
    pub fn get(&self, name: &str) -> Option<&ColorScale> {
        self.scales.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scales.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorScale)> {
        self.scales.iter().map(|(name, scale)| (name.as_str(), scale))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scales.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, ColorScale)> for PaletteRegistry {
    fn from_iter<I: IntoIterator<Item = (S, ColorScale)>>(iter: I) -> Self {
        Self {
            scales: iter
                .into_iter()
                .map(|(name, scale)| (name.into(), scale))
                .collect(),
        }
    }
}

/// Corner radius applied to components that don't override it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Assoc)]
#[serde(rename_all = "lowercase")]
#[func(pub fn rem(&self) -> f32)]
#[func(pub fn name(&self) -> &'static str)]
pub enum Radius {
    #[assoc(rem = 0.125)]
    #[assoc(name = "xs")]
    Xs,
    #[assoc(rem = 0.25)]
    #[assoc(name = "sm")]
    Sm,
    #[default]
    #[assoc(rem = 0.5)]
    #[assoc(name = "md")]
    Md,
    #[assoc(rem = 1.0)]
    #[assoc(name = "lg")]
    Lg,
    #[assoc(rem = 2.0)]
    #[assoc(name = "xl")]
    Xl,
}

impl Radius {
    pub fn css_value(&self) -> String {
        format!("{}rem", self.rem())
    }
}

/// Cursor shown over interactive elements such as buttons and checkboxes.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Assoc)]
#[serde(rename_all = "lowercase")]
#[func(pub fn css_value(&self) -> &'static str)]
pub enum CursorType {
    #[default]
    #[assoc(css_value = "default")]
    Default,
    #[assoc(css_value = "pointer")]
    Pointer,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub const ALL: [ColorMode; 2] = [ColorMode::Light, ColorMode::Dark];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Immutable theme configuration shared by every rendering surface.
///
/// Switching color mode or accent never mutates a `ThemeConfig`; it produces a
/// different resolved output through [`ThemeConfig::resolver`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(default)]
    pub name: String,
    #[serde(deserialize_with = "de_non_empty_string")]
    pub primary_color: String,
    #[serde(default)]
    pub default_radius: Radius,
    #[serde(default)]
    pub cursor_type: CursorType,
    #[serde(default = "default_variable_prefix")]
    pub variable_prefix: String,
    pub colors: PaletteRegistry,
}

fn default_variable_prefix() -> String {
    DEFAULT_VARIABLE_PREFIX.to_owned()
}

/// The embedded default theme, parsed on first access.
pub struct LazyLockTheme(LazyLock<ThemeConfig>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> ThemeConfig) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = ThemeConfig;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<ThemeConfig> for LazyLockTheme {
    fn as_ref(&self) -> &ThemeConfig {
        &self.0
    }
}

impl AsRef<ThemeConfig> for ThemeConfig {
    fn as_ref(&self) -> &ThemeConfig {
        self
    }
}

pub static DEFAULT_THEME: LazyLockTheme = LazyLockTheme::new(|| {
    ThemeConfig::from_json(include_str!("../themes/default.json"))
        .expect("embedded default theme is valid")
});

impl ThemeConfig {
    pub fn new(
        primary_color: impl Into<String>,
        default_radius: Radius,
        cursor_type: CursorType,
        colors: PaletteRegistry,
    ) -> Result<Self, ThemeError> {
        let theme = Self {
            name: String::new(),
            primary_color: primary_color.into(),
            default_radius,
            cursor_type,
            variable_prefix: default_variable_prefix(),
            colors,
        };
        theme.validate()?;
        Ok(theme)
    }

    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Self, ThemeError> {
        let theme: Self = serde_json::from_str(str.as_ref())?;
        theme.validate()?;
        Ok(theme)
    }

    /// The embedded default theme.
    pub fn builtin() -> &'static ThemeConfig {
        &DEFAULT_THEME
    }

    /// Checks that the primary color and every scale the token table reads are registered.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if !self.colors.contains(&self.primary_color) {
            return Err(ThemeError::unknown_scale(&self.primary_color));
        }

        for scale in SemanticToken::fixed_scales() {
            if !self.colors.contains(scale) {
                return Err(ThemeError::unknown_scale(scale));
            }
        }

        Ok(())
    }

    pub fn scale(&self, name: &str) -> Result<&ColorScale, ThemeError> {
        self.colors
            .get(name)
            .ok_or_else(|| ThemeError::unknown_scale(name))
    }

    pub fn primary_scale(&self) -> Result<&ColorScale, ThemeError> {
        self.scale(&self.primary_color)
    }
}
