//! A single-assignment promise and the future that observes it.
//!
//! A [`Promise`] may be cloned and handed to several producers (for example
//! a notification handler and a synchronous error path).  The first
//! [`Promise::resolve`] wins; later calls are ignored and report `false`.
//! If every producer is dropped before anyone resolves, the [`Future`]
//! completes with [`BrokenPromise`].
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll, Waker};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Promise was dropped before completion")]
pub struct BrokenPromise {}

#[derive(Debug)]
enum Slot<T> {
    Pending,
    Ready(T),
    Taken,
    Broken,
}

#[derive(Debug)]
struct Core<T> {
    slot: Slot<T>,
    /// Set once a value was stored; survives the value being taken.
    resolved: bool,
    sealed: bool,
    producers: usize,
    future_issued: bool,
    waker: Option<Waker>,
}

fn lock<T>(core: &Mutex<Core<T>>) -> MutexGuard<'_, Core<T>> {
    core.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct Promise<T> {
    core: Arc<Mutex<Core<T>>>,
}

#[derive(Debug)]
pub struct Future<T> {
    core: Arc<Mutex<Core<T>>>,
}

impl<T> Default for Promise<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Promise<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Promise")
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

impl<T> Clone for Promise<T> {
    fn clone(&self) -> Self {
        lock(&self.core).producers += 1;
        Self {
            core: Arc::clone(&self.core),
        }
    }
}

impl<T> Drop for Promise<T> {
    fn drop(&mut self) {
        let mut core = lock(&self.core);
        core.producers -= 1;
        if core.producers == 0 && matches!(core.slot, Slot::Pending) {
            core.slot = Slot::Broken;
            if let Some(waker) = core.waker.take() {
                waker.wake();
            }
        }
    }
}

impl<T> Promise<T> {
    pub fn new() -> Self {
        Self {
            core: Arc::new(Mutex::new(Core {
                slot: Slot::Pending,
                resolved: false,
                sealed: false,
                producers: 1,
                future_issued: false,
                waker: None,
            })),
        }
    }

    /// Create a promise together with its future.
    pub fn pair() -> (Self, Future<T>) {
        let promise = Self::new();
        let future = Future {
            core: Arc::clone(&promise.core),
        };
        lock(&promise.core).future_issued = true;
        (promise, future)
    }

    /// The observing future.  Only the first call across all clones
    /// returns `Some`.
    pub fn get_future(&mut self) -> Option<Future<T>> {
        let mut core = lock(&self.core);
        if core.future_issued {
            return None;
        }
        core.future_issued = true;
        Some(Future {
            core: Arc::clone(&self.core),
        })
    }

    /// Store `value` unless the promise already settled.  Returns whether
    /// this call was the one that resolved it.
    pub fn resolve(&self, value: T) -> bool {
        let mut core = lock(&self.core);
        if core.sealed || !matches!(core.slot, Slot::Pending) {
            return false;
        }
        core.slot = Slot::Ready(value);
        core.resolved = true;
        core.sealed = true;
        if let Some(waker) = core.waker.take() {
            waker.wake();
        }
        true
    }

    /// Whether a value was stored.
    pub fn is_resolved(&self) -> bool {
        lock(&self.core).resolved
    }

    /// Refuse any further resolution.  Returns `false` if a value was
    /// already stored.  The future stays pending until the producers go
    /// away, at which point it reports [`BrokenPromise`].
    pub fn seal(&self) -> bool {
        let mut core = lock(&self.core);
        let was_open = !core.sealed;
        core.sealed = true;
        was_open && !core.resolved
    }
}

impl<T> Future<T> {
    /// A future which is immediately ready with `value`.
    pub fn ready(value: T) -> Self {
        Self {
            core: Arc::new(Mutex::new(Core {
                slot: Slot::Ready(value),
                resolved: true,
                sealed: true,
                producers: 0,
                future_issued: true,
                waker: None,
            })),
        }
    }
}

impl<T> std::future::Future for Future<T> {
    type Output = Result<T, BrokenPromise>;

    fn poll(self: Pin<&mut Self>, ctx: &mut Context) -> Poll<Self::Output> {
        let mut core = lock(&self.core);
        match std::mem::replace(&mut core.slot, Slot::Taken) {
            Slot::Ready(value) => Poll::Ready(Ok(value)),
            Slot::Broken => {
                core.slot = Slot::Broken;
                Poll::Ready(Err(BrokenPromise {}))
            }
            Slot::Pending => {
                core.slot = Slot::Pending;
                core.waker.replace(ctx.waker().clone());
                Poll::Pending
            }
            Slot::Taken => Poll::Ready(Err(BrokenPromise {})),
        }
    }
}
