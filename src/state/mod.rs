//! Observable state containers.
//!
//! A [`Store`] holds the current value of one piece of screen state and
//! notifies subscribers whenever it is replaced or modified. It is a thin
//! wrapper over [`tokio::sync::watch`], so a rendering layer can either read
//! the latest value or `await` changes on a receiver.
//!
//! View models keep their stores private and hand out [`Observed`] handles,
//! so the only way to write is through the view model's event methods.

use tokio::sync::watch;

/// Publish/subscribe value holder.
#[derive(Debug)]
pub struct Store<T> {
    sender: watch::Sender<T>,
}

impl<T> Store<T> {
    /// Creates a store holding `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        let (sender, _receiver) = watch::channel(initial);
        Self { sender }
    }

    /// Clones out the current value.
    #[must_use]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.sender.borrow().clone()
    }

    /// Reads the current value without cloning it.
    #[must_use]
    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.sender.borrow())
    }

    /// Replaces the value and notifies subscribers.
    pub fn set(&self, value: T) {
        self.sender.send_replace(value);
    }

    /// Modifies the value in place and notifies subscribers.
    pub fn update(&self, modify: impl FnOnce(&mut T)) {
        self.sender.send_modify(modify);
    }

    /// Modifies the value in place, notifying subscribers only if `modify`
    /// reports that it changed something.
    #[must_use]
    pub fn update_if(&self, modify: impl FnOnce(&mut T) -> bool) -> bool {
        self.sender.send_if_modified(modify)
    }

    /// A receiver that observes every later change. The current value counts
    /// as already seen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }

    /// Read-only handle onto this store.
    #[must_use]
    pub const fn observe(&self) -> Observed<'_, T> {
        Observed { store: self }
    }
}

/// Read-only view of a [`Store`]: current value and change subscription,
/// no writes.
///
/// ```compile_fail
/// use petlife::state::Store;
///
/// let store = Store::new(1);
/// store.observe().set(2);
/// ```
#[derive(Debug)]
pub struct Observed<'a, T> {
    store: &'a Store<T>,
}

impl<T> Clone for Observed<'_, T> {
    fn clone(&self) -> Self {
        Self { store: self.store }
    }
}

impl<T> Observed<'_, T> {
    /// Clones out the current value.
    #[must_use]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.store.get()
    }

    /// Reads the current value without cloning it.
    #[must_use]
    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        self.store.with(read)
    }

    /// A receiver that observes every later change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.store.subscribe()
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
