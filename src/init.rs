use gpui::{App, Window};

use crate::{
    layout::{Breakpoints, ViewportExt, ViewportObserver, WindowLayoutExt},
    theme::{GlobalTheme, ThemeConfig, ThemeExt},
};

/// Installs the built-in theme and a viewport observer unless the app already set its own.
pub fn init(cx: &mut App) {
    if !cx.has_global::<GlobalTheme>() {
        cx.set_theme(ThemeConfig::builtin());
    }

    if cx.viewport_observer().is_none() {
        cx.set_viewport_observer(ViewportObserver::new(Breakpoints::default(), 0.));
    }
}

/// Feeds the window's width to the viewport observer. Call at the top of `render`.
pub fn init_for_window(window: &mut Window, cx: &mut App) {
    if let Some(observer) = cx.viewport_observer() {
        observer.set_width(window.viewport_width());
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_init_keeps_existing_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let mut indigo = ThemeConfig::builtin().clone();
            indigo.primary_color = "indigo".to_owned();
            cx.set_theme(indigo);

            init(cx);

            assert_eq!(cx.get_theme().primary_color, "indigo");
            assert!(cx.viewport_observer().is_some());
        });
    }
}
