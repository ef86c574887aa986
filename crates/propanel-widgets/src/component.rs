//! Component contract: local state, callbacks and mount roots.
//!
//! A component is a retained piece of UI with its own local state that is
//! drawn through egui every frame. Components are mounted into a [`Root`]
//! and stay alive until the root is explicitly unmounted.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use egui::Ui;

/// A shared, single-threaded callback.
pub type Callback<T> = Rc<dyn Fn(T)>;

/// A retained UI component.
pub trait Component {
    /// Draw the component and dispatch any interaction events it produced.
    fn show(&mut self, ui: &mut Ui);
}

/// Local state cell of a component.
///
/// Cloning yields another handle to the same cell, so an owner can push a new
/// value into a mounted component without borrowing the component itself.
pub struct LocalState<T: Copy> {
    cell: Rc<Cell<T>>,
}

impl<T: Copy> LocalState<T> {
    /// Create a new state cell holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            cell: Rc::new(Cell::new(value)),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.cell.get()
    }

    /// Replace the value.
    pub fn set(&self, value: T) {
        self.cell.set(value);
    }
}

impl<T: Copy> Clone for LocalState<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for LocalState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalState").field(&self.cell.get()).finish()
    }
}

/// A mount point holding at most one component.
///
/// Unmounting while the component is busy (e.g. from inside one of its own
/// callbacks) is deferred until the component returns control.
pub struct Root<C> {
    slot: Rc<RefCell<Option<C>>>,
    detach: Rc<Cell<bool>>,
}

impl<C> Clone for Root<C> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
            detach: Rc::clone(&self.detach),
        }
    }
}

impl<C> Default for Root<C> {
    fn default() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
            detach: Rc::new(Cell::new(false)),
        }
    }
}

impl<C: Component> Root<C> {
    /// Create an empty root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount `component`, replacing any component already mounted.
    pub fn render(&self, component: C) {
        self.detach.set(false);
        match self.slot.try_borrow_mut() {
            Ok(mut slot) => {
                if slot.replace(component).is_some() {
                    log::debug!("Replaced mounted component");
                }
            }
            Err(_) => log::warn!("Cannot mount into a root whose component is running"),
        }
    }

    /// Unmount the current component. Returns false if nothing was mounted.
    pub fn unmount(&self) -> bool {
        match self.slot.try_borrow_mut() {
            Ok(mut slot) => slot.take().is_some(),
            Err(_) => {
                // Busy: the component is on the stack. Drop it once it returns.
                let was_pending = self.detach.replace(true);
                !was_pending
            }
        }
    }

    /// Whether a component is mounted (and not scheduled for unmount).
    pub fn is_mounted(&self) -> bool {
        if self.detach.get() {
            return false;
        }
        self.slot.try_borrow().map(|slot| slot.is_some()).unwrap_or(true)
    }

    /// Run `f` against the mounted component, if any.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut C) -> R) -> Option<R> {
        if self.detach.get() {
            return None;
        }
        let result = {
            let mut slot = self.slot.try_borrow_mut().ok()?;
            slot.as_mut().map(f)
        };
        if self.detach.replace(false) {
            self.slot.borrow_mut().take();
        }
        result
    }

    /// Draw the mounted component.
    pub fn show(&self, ui: &mut Ui) {
        self.with_mut(|component| component.show(ui));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        shows: usize,
        on_show: Option<Rc<dyn Fn()>>,
    }

    impl Component for Counter {
        fn show(&mut self, _ui: &mut Ui) {
            self.shows += 1;
            if let Some(cb) = &self.on_show {
                cb();
            }
        }
    }

    fn counter() -> Counter {
        Counter {
            shows: 0,
            on_show: None,
        }
    }

    #[test]
    fn test_local_state_is_shared_between_clones() {
        let state = LocalState::new(1.0_f64);
        let other = state.clone();
        other.set(4.5);
        assert!((state.get() - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_render_and_unmount() {
        let root = Root::new();
        assert!(!root.is_mounted());
        root.render(counter());
        assert!(root.is_mounted());
        assert!(root.unmount());
        assert!(!root.is_mounted());
        assert!(!root.unmount());
        assert!(root.with_mut(|c| c.shows).is_none());
    }

    #[test]
    fn test_unmount_from_inside_component_is_deferred() {
        let root: Root<Counter> = Root::new();
        let inner = root.clone();
        root.render(Counter {
            shows: 0,
            on_show: Some(Rc::new(move || {
                assert!(inner.unmount());
                assert!(!inner.is_mounted());
            })),
        });

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| root.show(ui));
        });

        assert!(!root.is_mounted());
        assert!(root.with_mut(|c| c.shows).is_none());
    }

    #[test]
    fn test_render_replaces_component() {
        let root = Root::new();
        root.render(counter());
        root.with_mut(|c| c.shows = 3);
        root.render(counter());
        assert_eq!(root.with_mut(|c| c.shows), Some(0));
    }
}
