#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;

use crate::ColorMode;

/// Neutral scale read by surface and text tokens in light mode.
pub const LIGHT_NEUTRAL_SCALE: &str = "gray";

/// Neutral scale read by surface and text tokens in dark mode.
pub const DARK_NEUTRAL_SCALE: &str = "dark";

/// Where a semantic token takes its shade from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleSource {
    /// The theme's primary color, or the accent picked on the resolver.
    Primary,
    /// `gray` in light mode, `dark` in dark mode.
    Neutral,
    /// A fixed scale, independent of the accent.
    Named(&'static str),
}

impl ScaleSource {
    /// Name of the scale to read, given the active accent.
    pub fn scale_name<'a>(&self, accent: &'a str, mode: ColorMode) -> &'a str {
        match (self, mode) {
            (Self::Primary, _) => accent,
            (Self::Neutral, ColorMode::Light) => LIGHT_NEUTRAL_SCALE,
            (Self::Neutral, ColorMode::Dark) => DARK_NEUTRAL_SCALE,
            (Self::Named(name), _) => *name,
        }
    }
}

/// Semantic color tokens and the shade each one reads per color mode.
///
/// Dark mode reads lighter shades of accent colors so they stay legible on
/// dark surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Assoc)]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn source(&self) -> ScaleSource)]
#[func(pub fn light_index(&self) -> usize)]
#[func(pub fn dark_index(&self) -> usize)]
pub enum SemanticToken {
    /// Filled backgrounds of primary buttons and active controls.
    #[assoc(name = "primary")]
    #[assoc(source = ScaleSource::Primary)]
    #[assoc(light_index = 7)]
    #[assoc(dark_index = 6)]
    Primary,
    #[assoc(name = "primary-hover")]
    #[assoc(source = ScaleSource::Primary)]
    #[assoc(light_index = 8)]
    #[assoc(dark_index = 7)]
    PrimaryHover,
    /// Tinted backgrounds of light variants.
    #[assoc(name = "primary-light")]
    #[assoc(source = ScaleSource::Primary)]
    #[assoc(light_index = 0)]
    #[assoc(dark_index = 9)]
    PrimaryLight,
    #[assoc(name = "primary-light-hover")]
    #[assoc(source = ScaleSource::Primary)]
    #[assoc(light_index = 1)]
    #[assoc(dark_index = 8)]
    PrimaryLightHover,
    /// Accent-colored text on the body background.
    #[assoc(name = "primary-text")]
    #[assoc(source = ScaleSource::Primary)]
    #[assoc(light_index = 8)]
    #[assoc(dark_index = 4)]
    PrimaryText,
    /// Page background.
    #[assoc(name = "body")]
    #[assoc(source = ScaleSource::Neutral)]
    #[assoc(light_index = 0)]
    #[assoc(dark_index = 7)]
    Body,
    /// Card and popover background.
    #[assoc(name = "surface")]
    #[assoc(source = ScaleSource::Neutral)]
    #[assoc(light_index = 1)]
    #[assoc(dark_index = 6)]
    Surface,
    #[assoc(name = "text")]
    #[assoc(source = ScaleSource::Neutral)]
    #[assoc(light_index = 9)]
    #[assoc(dark_index = 0)]
    Text,
    /// Secondary text.
    #[assoc(name = "dimmed")]
    #[assoc(source = ScaleSource::Neutral)]
    #[assoc(light_index = 6)]
    #[assoc(dark_index = 2)]
    Dimmed,
    #[assoc(name = "border")]
    #[assoc(source = ScaleSource::Neutral)]
    #[assoc(light_index = 3)]
    #[assoc(dark_index = 4)]
    Border,
    #[assoc(name = "placeholder")]
    #[assoc(source = ScaleSource::Neutral)]
    #[assoc(light_index = 5)]
    #[assoc(dark_index = 3)]
    Placeholder,
    #[assoc(name = "error")]
    #[assoc(source = ScaleSource::Named("red"))]
    #[assoc(light_index = 7)]
    #[assoc(dark_index = 5)]
    Error,
    #[assoc(name = "success")]
    #[assoc(source = ScaleSource::Named("green"))]
    #[assoc(light_index = 7)]
    #[assoc(dark_index = 5)]
    Success,
    #[assoc(name = "warning")]
    #[assoc(source = ScaleSource::Named("yellow"))]
    #[assoc(light_index = 7)]
    #[assoc(dark_index = 5)]
    Warning,
    #[assoc(name = "info")]
    #[assoc(source = ScaleSource::Primary)]
    #[assoc(light_index = 6)]
    #[assoc(dark_index = 4)]
    Info,
}

impl SemanticToken {
    pub const ALL: [SemanticToken; 15] = [
        Self::Primary,
        Self::PrimaryHover,
        Self::PrimaryLight,
        Self::PrimaryLightHover,
        Self::PrimaryText,
        Self::Body,
        Self::Surface,
        Self::Text,
        Self::Dimmed,
        Self::Border,
        Self::Placeholder,
        Self::Error,
        Self::Success,
        Self::Warning,
        Self::Info,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }

    pub fn index(&self, mode: ColorMode) -> usize {
        match mode {
            ColorMode::Light => self.light_index(),
            ColorMode::Dark => self.dark_index(),
        }
    }

    /// Scales every theme has to register regardless of its primary color.
    pub fn fixed_scales() -> Vec<&'static str> {
        let mut scales = vec![LIGHT_NEUTRAL_SCALE, DARK_NEUTRAL_SCALE];

        for token in Self::ALL {
            if let ScaleSource::Named(name) = token.source()
                && !scales.contains(&name)
            {
                scales.push(name);
            }
        }

        scales
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SCALE_LEN;

    #[test]
    fn test_names_round_trip() {
        for token in SemanticToken::ALL {
            assert_eq!(SemanticToken::from_name(token.name()), Some(token));
        }
        assert_eq!(SemanticToken::from_name("Primary"), None);
        assert_eq!(SemanticToken::from_name("accent"), None);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = SemanticToken::ALL.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SemanticToken::ALL.len());
    }

    #[test]
    fn test_indices_fit_in_a_scale() {
        for token in SemanticToken::ALL {
            for mode in ColorMode::ALL {
                assert!(token.index(mode) < SCALE_LEN, "{} overflows", token.name());
            }
        }
    }

    #[test]
    fn test_primary_is_lighter_in_dark_mode() {
        let token = SemanticToken::Primary;
        assert_eq!(token.index(ColorMode::Light), 7);
        assert_eq!(token.index(ColorMode::Dark), 6);
    }

    #[test]
    fn test_neutral_source_switches_scale_with_mode() {
        let source = SemanticToken::Surface.source();
        assert_eq!(source.scale_name("blue", ColorMode::Light), "gray");
        assert_eq!(source.scale_name("blue", ColorMode::Dark), "dark");
        assert_eq!(
            SemanticToken::Primary
                .source()
                .scale_name("indigo", ColorMode::Dark),
            "indigo"
        );
    }

    #[test]
    fn test_fixed_scales() {
        assert_eq!(
            SemanticToken::fixed_scales(),
            ["gray", "dark", "red", "green", "yellow"]
        );
    }
}
