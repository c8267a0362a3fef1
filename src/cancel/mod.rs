//! Cancellation handle for in-flight operations.
//!
//! A [`Cancellable`] is a shared, triggerable signal. Clones observe the same
//! signal, so one handle can be given to several operations and cancelled from
//! anywhere. Operations check it before their first I/O call and every time
//! they are polled; a suspended operation is woken when the signal fires.
//!
//! Each operation holds a [`Registration`] that owns one slot in the handle's
//! waker slab. The slot is freed when the operation completes or is dropped,
//! so a handle shared across a connection's whole lifetime stays bounded by
//! the number of operations currently in flight.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::Waker;

use slab::Slab;

/// A shared cancellation signal.
///
/// # Example
///
/// ```
/// use rtmpio::Cancellable;
///
/// let cancellable = Cancellable::new();
/// let observer = cancellable.clone();
///
/// assert!(!observer.is_cancelled());
/// cancellable.cancel();
/// assert!(observer.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cancellable {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    wakers: Mutex<Slab<Waker>>,
}

impl Inner {
    fn wakers(&self) -> MutexGuard<'_, Slab<Waker>> {
        // A panic while holding the lock cannot leave the slab inconsistent.
        self.wakers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Cancellable {
    /// Creates a new, untriggered cancellation signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Triggers the signal and wakes every operation suspended on it.
    ///
    /// Cancelling more than once has no further effect.
    pub fn cancel(&self) {
        if self.inner.cancelled.swap(true, Ordering::AcqRel) {
            return;
        }
        let wakers: Vec<Waker> = self.inner.wakers().drain().collect();
        for waker in wakers {
            waker.wake();
        }
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Returns `true` if `self` and `other` share the same signal.
    pub fn same_signal(&self, other: &Cancellable) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns the number of operations currently waiting on this signal.
    pub fn waiters(&self) -> usize {
        self.inner.wakers().len()
    }
}

/// One operation's interest in a [`Cancellable`].
///
/// Holds at most one waker slot; the slot is released on [`release`] or drop.
///
/// [`release`]: Registration::release
#[derive(Debug)]
#[cfg_attr(not(feature = "async-io"), allow(dead_code))]
pub(crate) struct Registration {
    cancellable: Cancellable,
    key: Option<usize>,
}

#[cfg_attr(not(feature = "async-io"), allow(dead_code))]
impl Registration {
    pub(crate) fn new(cancellable: Cancellable) -> Self {
        Self {
            cancellable,
            key: None,
        }
    }

    /// Returns `true` if the signal has fired; otherwise stores `waker` in
    /// this registration's slot so a later cancel wakes it.
    pub(crate) fn poll_cancelled(&mut self, waker: &Waker) -> bool {
        if self.cancellable.is_cancelled() {
            self.release();
            return true;
        }
        let mut wakers = self.cancellable.inner.wakers();
        // Re-check under the lock so a concurrent cancel cannot miss us.
        if self.cancellable.is_cancelled() {
            drop(wakers);
            self.release();
            return true;
        }
        match self.key.and_then(|key| wakers.get_mut(key)) {
            Some(stored) => {
                if !stored.will_wake(waker) {
                    stored.clone_from(waker);
                }
            }
            None => self.key = Some(wakers.insert(waker.clone())),
        }
        false
    }

    /// Frees this registration's waker slot, if it holds one.
    pub(crate) fn release(&mut self) {
        if let Some(key) = self.key.take() {
            let mut wakers = self.cancellable.inner.wakers();
            // `cancel` drains the slab, so the slot may already be gone. No
            // slot is handed out after a drain, so the key cannot be reused.
            wakers.try_remove(key);
        }
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.release();
    }
}
