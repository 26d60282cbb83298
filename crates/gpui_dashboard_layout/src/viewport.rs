use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::{Breakpoints, LayoutComposer, LayoutError, LayoutSlot, Placement, is_mobile};

/// Snapshot of the viewport delivered to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub width_px: f32,
    pub breakpoint: String,
    pub is_mobile: bool,
}

impl Viewport {
    fn classify(width_px: f32, breakpoints: &Breakpoints) -> Self {
        Self {
            width_px,
            breakpoint: breakpoints.classify(width_px).to_owned(),
            is_mobile: is_mobile(width_px),
        }
    }
}

type Listener = Box<dyn FnMut(&Viewport)>;

struct ObserverState {
    breakpoints: Breakpoints,
    viewport: Viewport,
    next_id: usize,
    listeners: Vec<(usize, Listener)>,
    notifying: bool,
    /// The width changed while a notification was running.
    pending: bool,
}

impl ObserverState {
    fn take_listener(&mut self, id: usize) -> Option<Listener> {
        let index = self.listeners.iter().position(|(entry, _)| *entry == id)?;
        Some(self.listeners.remove(index).1)
    }
}

struct Shared {
    state: RefCell<ObserverState>,
    /// Subscriptions dropped while their listener was out of `state`.
    removed: RefCell<Vec<usize>>,
}

/// Pushes viewport width changes to subscribers.
///
/// Single threaded. Listeners may subscribe, unsubscribe or change the width
/// from inside a notification; a nested width change is delivered once the
/// current round finishes.
///
/// Listener closures are always dropped with no borrow held, so a listener
/// may own other subscriptions of the same observer.
#[derive(Clone)]
pub struct ViewportObserver {
    shared: Rc<Shared>,
}

/// Keeps a listener registered. Dropping it unsubscribes.
#[must_use = "dropping a subscription unsubscribes its listener"]
pub struct Subscription {
    id: usize,
    shared: Weak<Shared>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(shared) = self.shared.upgrade() else {
            return;
        };

        let listener = shared
            .state
            .try_borrow_mut()
            .ok()
            .and_then(|mut state| state.take_listener(self.id));

        match listener {
            // Dropped here, after the borrow ends.
            Some(listener) => drop(listener),
            None => shared.removed.borrow_mut().push(self.id),
        }
    }
}

impl ViewportObserver {
    pub fn new(breakpoints: Breakpoints, width_px: f32) -> Self {
        let viewport = Viewport::classify(width_px, &breakpoints);
        Self {
            shared: Rc::new(Shared {
                state: RefCell::new(ObserverState {
                    breakpoints,
                    viewport,
                    next_id: 0,
                    listeners: Vec::new(),
                    notifying: false,
                    pending: false,
                }),
                removed: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.shared.state.borrow().viewport.clone()
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.shared.state.borrow().breakpoints.clone()
    }

    pub fn subscribe(&self, listener: impl FnMut(&Viewport) + 'static) -> Subscription {
        let mut state = self.shared.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.push((id, Box::new(listener)));

        Subscription {
            id,
            shared: Rc::downgrade(&self.shared),
        }
    }

    /// Records a new width and notifies listeners if it differs from the last one.
    pub fn set_width(&self, width_px: f32) {
        {
            let mut state = self.shared.state.borrow_mut();
            if state.viewport.width_px == width_px
                || (state.viewport.width_px.is_nan() && width_px.is_nan())
            {
                return;
            }
            state.viewport = Viewport::classify(width_px, &state.breakpoints);
            if state.notifying {
                state.pending = true;
                return;
            }
        }

        self.notify();
    }

    fn is_removed(&self, id: usize) -> bool {
        self.shared.removed.borrow().contains(&id)
    }

    fn notify(&self) {
        loop {
            let (viewport, mut listeners) = {
                let mut state = self.shared.state.borrow_mut();
                state.notifying = true;
                (state.viewport.clone(), std::mem::take(&mut state.listeners))
            };

            for (id, listener) in listeners.iter_mut() {
                // Unsubscribed earlier in this round.
                if self.is_removed(*id) {
                    continue;
                }
                listener(&viewport);
            }

            let removed = std::mem::take(&mut *self.shared.removed.borrow_mut());
            let (mut kept, dropped): (Vec<_>, Vec<_>) = listeners
                .into_iter()
                .partition(|(id, _)| !removed.contains(id));

            let pending = {
                let mut state = self.shared.state.borrow_mut();
                // Listeners added during the round go after the existing ones.
                kept.append(&mut state.listeners);
                state.listeners = kept;
                state.notifying = false;
                std::mem::take(&mut state.pending)
            };

            drop(dropped);

            if !pending {
                break;
            }
        }
    }
}

impl LayoutComposer {
    /// Recomputes a fresh placement of `slots` on every viewport change.
    ///
    /// `on_placement` runs once immediately with the current viewport.
    pub fn attach(
        self,
        observer: &ViewportObserver,
        slots: Vec<LayoutSlot>,
        mut on_placement: impl FnMut(Result<Placement, LayoutError>) + 'static,
    ) -> Subscription {
        on_placement(self.compose(&slots, observer.viewport().width_px));

        observer.subscribe(move |viewport| {
            on_placement(self.compose(&slots, viewport.width_px));
        })
    }
}
