use indexmap::IndexMap;

use crate::{ColorMode, ColorValue, SemanticToken, ThemeConfig, ThemeError};

/// Color returned by the degraded lookups when a token can't be resolved.
pub const NEUTRAL_FALLBACK: ColorValue = ColorValue::from_hex(0x868e96);

/// Resolves semantic tokens against a theme and an accent scale.
///
/// A resolver borrows the theme and never changes it, so picking another accent
/// or mode is just a matter of building another resolver.
#[derive(Debug, Clone, Copy)]
pub struct ThemeResolver<'a> {
    theme: &'a ThemeConfig,
    accent: &'a str,
}

impl ThemeConfig {
    /// A resolver using the theme's own primary color as accent.
    pub fn resolver(&self) -> ThemeResolver<'_> {
        ThemeResolver {
            theme: self,
            accent: &self.primary_color,
        }
    }

    /// A resolver using another registered scale as accent.
    pub fn resolver_with_accent<'a>(
        &'a self,
        accent: &'a str,
    ) -> Result<ThemeResolver<'a>, ThemeError> {
        self.scale(accent)?;
        Ok(ThemeResolver {
            theme: self,
            accent,
        })
    }
}

impl<'a> ThemeResolver<'a> {
    pub fn theme(&self) -> &'a ThemeConfig {
        self.theme
    }

    pub fn accent(&self) -> &'a str {
        self.accent
    }

    pub fn resolve(&self, token: SemanticToken, mode: ColorMode) -> Result<ColorValue, ThemeError> {
        let scale_name = token.source().scale_name(self.accent, mode);
        self.theme.scale(scale_name)?.shade(token.index(mode))
    }

    pub fn resolve_token(&self, token: &str, mode: ColorMode) -> Result<ColorValue, ThemeError> {
        let token = SemanticToken::from_name(token).ok_or_else(|| ThemeError::UnknownToken {
            token: token.to_owned(),
        })?;
        self.resolve(token, mode)
    }

    /// Like [`Self::resolve_token`], but logs the error and returns [`NEUTRAL_FALLBACK`].
    pub fn resolve_token_or_neutral(&self, token: &str, mode: ColorMode) -> ColorValue {
        self.resolve_token(token, mode).unwrap_or_else(|err| {
            tracing::warn!(token, mode = mode.name(), "falling back to neutral color: {err}");
            NEUTRAL_FALLBACK
        })
    }

    /// Every semantic token in table order, then every registered shade.
    pub fn css_variables(&self, mode: ColorMode) -> Result<IndexMap<String, ColorValue>, ThemeError> {
        let prefix = &self.theme.variable_prefix;
        let mut variables = IndexMap::new();

        for token in SemanticToken::ALL {
            variables.insert(color_variable(prefix, token.name()), self.resolve(token, mode)?);
        }

        for (name, scale) in self.theme.colors.iter() {
            for (index, shade) in scale.shades().iter().enumerate() {
                variables.insert(color_variable(prefix, &format!("{name}-{index}")), *shade);
            }
        }

        Ok(variables)
    }

    /// Color variables rendered as strings, plus the radius and cursor properties.
    pub fn css_properties(&self, mode: ColorMode) -> Result<IndexMap<String, String>, ThemeError> {
        let prefix = &self.theme.variable_prefix;
        let mut properties: IndexMap<String, String> = self
            .css_variables(mode)?
            .into_iter()
            .map(|(name, color)| (name, color.to_string()))
            .collect();

        properties.insert(
            format!("--{prefix}-radius-default"),
            self.theme.default_radius.css_value(),
        );
        properties.insert(
            format!("--{prefix}-cursor-type"),
            self.theme.cursor_type.css_value().to_owned(),
        );

        Ok(properties)
    }

    /// One rule per color mode, keyed on the `data-color-scheme` root attribute.
    pub fn render_stylesheet(&self) -> Result<String, ThemeError> {
        let mut css = String::new();

        for mode in ColorMode::ALL {
            css.push_str(&render_rule(mode, &self.css_properties(mode)?));
        }

        Ok(css)
    }
}

fn render_rule(mode: ColorMode, properties: &IndexMap<String, String>) -> String {
    let declarations: String = properties
        .iter()
        .map(|(name, value)| format!("  {name}: {value};\n"))
        .collect();

    format!(
        ":root[data-color-scheme=\"{}\"] {{\n{declarations}}}\n",
        mode.name()
    )
}

fn color_variable(prefix: &str, name: &str) -> String {
    format!("--{prefix}-color-{name}")
}

pub fn resolve_token(
    theme: &ThemeConfig,
    token: &str,
    mode: ColorMode,
) -> Result<ColorValue, ThemeError> {
    theme.resolver().resolve_token(token, mode)
}

pub fn resolve_css_variables(
    theme: &ThemeConfig,
    mode: ColorMode,
) -> Result<IndexMap<String, ColorValue>, ThemeError> {
    theme.resolver().css_variables(mode)
}

pub fn resolve_css_properties(
    theme: &ThemeConfig,
    mode: ColorMode,
) -> Result<IndexMap<String, String>, ThemeError> {
    theme.resolver().css_properties(mode)
}

pub fn render_stylesheet(theme: &ThemeConfig) -> Result<String, ThemeError> {
    theme.resolver().render_stylesheet()
}
