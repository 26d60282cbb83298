use gpui::{App, Global, Window};

use crate::layout::{LayoutComposer, LayoutError, LayoutSlot, Placement, ViewportObserver};

/// Viewport observer fed from the app's windows.
pub struct GlobalViewport(pub ViewportObserver);

impl Global for GlobalViewport {}

pub trait WindowLayoutExt {
    /// Width of the window's content area, in logical pixels.
    fn viewport_width(&self) -> f32;

    /// Places `slots` for the window's current width.
    fn compose(
        &self,
        composer: &LayoutComposer,
        slots: &[LayoutSlot],
    ) -> Result<Placement, LayoutError>;
}

impl WindowLayoutExt for Window {
    fn viewport_width(&self) -> f32 {
        self.viewport_size().width.to_f64() as f32
    }

    fn compose(
        &self,
        composer: &LayoutComposer,
        slots: &[LayoutSlot],
    ) -> Result<Placement, LayoutError> {
        composer.compose(slots, self.viewport_width())
    }
}

pub trait ViewportExt {
    fn set_viewport_observer(&mut self, observer: ViewportObserver);

    fn viewport_observer(&self) -> Option<&ViewportObserver>;
}

impl ViewportExt for App {
    fn set_viewport_observer(&mut self, observer: ViewportObserver) {
        self.set_global(GlobalViewport(observer))
    }

    fn viewport_observer(&self) -> Option<&ViewportObserver> {
        self.try_global::<GlobalViewport>().map(|global| &global.0)
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::layout::Breakpoints;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_viewport_observer_global(cx: &mut TestAppContext) {
        cx.update(|cx| {
            assert!(cx.viewport_observer().is_none());

            cx.set_viewport_observer(ViewportObserver::new(Breakpoints::default(), 1280.));
            let observer = cx.viewport_observer().unwrap();
            assert_eq!(observer.viewport().breakpoint, "lg");
        });
    }
}
