use gpui::{App, Global, Rgba};

use crate::{
    ColorValueExt,
    theme::{ColorMode, NEUTRAL_FALLBACK, SemanticToken, ThemeConfig},
};

/// The theme shared by every view of the app.
pub struct GlobalTheme(pub ThemeConfig);

impl Global for GlobalTheme {}

/// Color mode the active theme resolves tokens for.
pub struct ActiveColorMode(pub ColorMode);

impl Global for ActiveColorMode {}

/// Extension trait for accessing the global theme and resolving its tokens.
pub trait ThemeExt {
    /// Replaces the theme. The previous one is dropped, never mutated.
    fn set_theme<T: AsRef<ThemeConfig>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &ThemeConfig;

    fn color_mode(&self) -> ColorMode;

    fn set_color_mode(&mut self, mode: ColorMode);

    /// Resolves `token` for the active color mode, falling back to a neutral color.
    fn resolve_color(&self, token: SemanticToken) -> Rgba;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<ThemeConfig>>(&mut self, theme: T) {
        self.set_global(GlobalTheme(theme.as_ref().clone()))
    }

    fn get_theme(&self) -> &ThemeConfig {
        &self.global::<GlobalTheme>().0
    }

    fn color_mode(&self) -> ColorMode {
        self.try_global::<ActiveColorMode>()
            .map(|mode| mode.0)
            .unwrap_or_default()
    }

    fn set_color_mode(&mut self, mode: ColorMode) {
        self.set_global(ActiveColorMode(mode))
    }

    fn resolve_color(&self, token: SemanticToken) -> Rgba {
        let mode = self.color_mode();

        self.get_theme()
            .resolver()
            .resolve(token, mode)
            .unwrap_or_else(|err| {
                tracing::warn!(token = token.name(), "falling back to neutral color: {err}");
                NEUTRAL_FALLBACK
            })
            .to_rgba()
    }
}
