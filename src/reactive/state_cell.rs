use std::cell::RefCell;
use std::rc::Rc;

/// Shared mutable state owned by a stateful renderable.
///
/// A `StateCell<T>` is the mutation path the harness uses to advance local
/// state between render passes: the wrapper holding the cell never writes to
/// it, and writes are gated on value equality so a no-op update leaves pure
/// wrappers memoized.
///
/// All render invocations happen on one thread within a single dispatch pass,
/// so the cell uses plain interior mutability rather than a lock.
///
/// # Example
/// ```ignore
/// let state = create_state(Attributes::new().with("count", 0));
/// let (wrapper, _) = (stateful("s", RenderPolicy::Pure, state.clone()), ());
/// state.update(|s| s.set("count", 1)); // next pass re-renders
/// ```
pub struct StateCell<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> StateCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Borrow the current value.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.borrow())
    }
}

impl<T: Clone> StateCell<T> {
    /// Get a snapshot of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().clone()
    }
}

impl<T: PartialEq> StateCell<T> {
    /// Sets the value, skipping the write when nothing actually changed.
    pub fn set(&self, value: T) {
        let mut guard = self.inner.borrow_mut();
        if *guard != value {
            *guard = value;
        }
    }
}

impl<T> StateCell<T> {
    /// Updates the value in place through a closure.
    ///
    /// Whether the update changed anything is detected downstream: pure
    /// wrappers compare state snapshots by value, so an update that leaves
    /// the value equal to before still memoizes.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        f(&mut self.inner.borrow_mut());
    }
}

pub fn create_state<T>(value: T) -> StateCell<T> {
    StateCell::new(value)
}
