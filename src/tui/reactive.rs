//! Reactive state primitives for components
//!
//! Components own their state through [`UseState`] slots. Every write bumps a
//! shared [`RenderSignal`], which the event loop polls to decide whether the
//! frame needs to be redrawn. State storage stays decoupled from display:
//! components never draw on write, they only notify.
//!
//! Upward communication uses [`Callback`] props. An owning component builds a
//! callback (usually from a [`StateSetter`]) and hands it to the component it
//! owns; the owned component invokes it without knowing what it does.
//!
//! ```text
//! ParentCounter                       ChildCounter
//!   counter: UseState<u64> ◄──weak──  on_report: Callback<u64>
//!        │                                 │
//!        └──────── notify ──► RenderSignal ◄┘ notify
//! ```
//!
//! Everything here is single-threaded (`Rc`/`Cell`); state only ever lives on
//! the UI task.

use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Re-render notification shared by every component in a tree
///
/// The generation increases on each state write. The event loop remembers the
/// generation it last drew and redraws when it differs.
#[derive(Clone, Default)]
pub struct RenderSignal {
    generation: Rc<Cell<u64>>,
}

impl RenderSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a re-render
    pub fn notify(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }

    /// Current generation (number of notifications so far)
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }
}

impl fmt::Debug for RenderSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderSignal")
            .field("generation", &self.generation.get())
            .finish()
    }
}

/// A state slot owned by a component
///
/// The component holds the only strong reference to the slot, so the value
/// lives exactly as long as the component (mount to unmount). Setters handed
/// out through [`UseState::setter`] hold weak references.
pub struct UseState<T: Copy> {
    slot: Rc<Cell<T>>,
    signal: RenderSignal,
}

impl<T: Copy> UseState<T> {
    pub fn new(initial: T, signal: RenderSignal) -> Self {
        Self {
            slot: Rc::new(Cell::new(initial)),
            signal,
        }
    }

    pub fn get(&self) -> T {
        self.slot.get()
    }

    /// Overwrite the value. Always notifies, even when the value is unchanged.
    pub fn set(&self, value: T) {
        self.slot.set(value);
        self.signal.notify();
    }

    /// Replace the value with `f(current)`
    pub fn update(&self, f: impl FnOnce(T) -> T) {
        self.set(f(self.slot.get()));
    }

    /// Weak write handle, suitable for capturing in a [`Callback`]
    pub fn setter(&self) -> StateSetter<T> {
        StateSetter {
            slot: Rc::downgrade(&self.slot),
            signal: self.signal.clone(),
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for UseState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UseState").field(&self.slot.get()).finish()
    }
}

/// Write handle to a [`UseState`] that does not keep it alive
#[derive(Clone)]
pub struct StateSetter<T: Copy> {
    slot: Weak<Cell<T>>,
    signal: RenderSignal,
}

impl<T: Copy> StateSetter<T> {
    /// Write through to the owning state.
    ///
    /// Returns `false` if the owning component has been unmounted; the write
    /// is dropped in that case.
    pub fn set(&self, value: T) -> bool {
        match self.slot.upgrade() {
            Some(slot) => {
                slot.set(value);
                self.signal.notify();
                true
            }
            None => {
                tracing::debug!("Ignoring state write after unmount");
                false
            }
        }
    }
}

/// A handler passed as a prop from an owning component to an owned one
///
/// Cloning shares the same handler.
pub struct Callback<IN> {
    handler: Rc<dyn Fn(IN)>,
}

impl<IN> Callback<IN> {
    pub fn new(handler: impl Fn(IN) + 'static) -> Self {
        Self {
            handler: Rc::new(handler),
        }
    }

    /// Invoke the handler
    pub fn emit(&self, value: IN) {
        (self.handler)(value);
    }
}

impl<IN> Clone for Callback<IN> {
    fn clone(&self) -> Self {
        Self {
            handler: Rc::clone(&self.handler),
        }
    }
}

impl<IN> fmt::Debug for Callback<IN> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

#[cfg(test)]
impl<IN: 'static> Callback<IN> {
    /// A callback that discards its input
    pub fn noop() -> Self {
        Self::new(|_| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn set_notifies_even_when_unchanged() {
        let signal = RenderSignal::new();
        let state = UseState::new(5u64, signal.clone());

        state.set(5);
        state.set(5);

        assert_eq!(state.get(), 5);
        assert_eq!(signal.generation(), 2);
    }

    #[test]
    fn update_applies_closure() {
        let signal = RenderSignal::new();
        let state = UseState::new(1u64, signal.clone());

        state.update(|v| v * 10);

        assert_eq!(state.get(), 10);
        assert_eq!(signal.generation(), 1);
    }

    #[test]
    fn setter_writes_through_to_owner() {
        let signal = RenderSignal::new();
        let state = UseState::new(0u64, signal.clone());
        let setter = state.setter();

        assert!(setter.set(42));
        assert_eq!(state.get(), 42);
        assert_eq!(signal.generation(), 1);
    }

    #[test]
    fn setter_after_unmount_is_ignored() {
        let signal = RenderSignal::new();
        let setter = {
            let state = UseState::new(0u64, signal.clone());
            state.setter()
        };

        assert!(!setter.set(7));
        assert_eq!(signal.generation(), 0);
    }

    #[test]
    fn callback_clones_share_handler() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let callback = Callback::new(move |v: u64| sink.borrow_mut().push(v));
        let clone = callback.clone();

        callback.emit(1);
        clone.emit(2);

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn callback_debug_is_opaque() {
        assert_eq!(format!("{:?}", Callback::<u64>::noop()), "Callback(..)");
    }
}
