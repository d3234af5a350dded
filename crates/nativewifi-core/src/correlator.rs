//! Turning "fire an action, then wait for a matching notification" into one
//! awaitable result.
//!
//! Both patterns are built on [`promise`]: a handler running on a native
//! thread resolves a promise, and [`settle`] races the promise's future
//! against a timeout and a cancellation signal.  A promise resolves at most
//! once, so whichever of the notification, a synchronous failure, the timer
//! or the cancel signal comes first decides the result; the rest are no-ops.
//!
//! [`Countdown`] is the multi-target variant: it resolves once every target
//! has reported, with removal and the completion check done under a single
//! lock so concurrent reports from different native threads cannot lose an
//! update.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use promise::{Future, Promise};
use uuid::Uuid;

use crate::cancel::CancelSignal;
use crate::error::{Error, Result};

/// How a correlation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled<T> {
    Resolved(T),
    TimedOut,
    Cancelled,
    /// Every producer went away without resolving.
    Abandoned,
}

impl<T> Settled<T> {
    pub fn resolved(self) -> Option<T> {
        match self {
            Self::Resolved(value) => Some(value),
            _ => None,
        }
    }
}

/// Reject a zero timeout.
pub fn ensure_timeout(timeout: Duration) -> Result<()> {
    if timeout.is_zero() {
        return Err(Error::InvalidArgument(
            "timeout must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Race a correlation against `timeout` and `cancel`.
pub async fn settle<T>(future: Future<T>, timeout: Duration, cancel: &CancelSignal) -> Settled<T> {
    tokio::select! {
        biased;
        result = future => match result {
            Ok(value) => Settled::Resolved(value),
            Err(_) => Settled::Abandoned,
        },
        () = cancel.cancelled() => Settled::Cancelled,
        () = tokio::time::sleep(timeout) => Settled::TimedOut,
    }
}

/// A single-target correlation.
#[derive(Debug, Clone)]
pub struct Pending<T> {
    promise: Promise<T>,
}

impl<T> Pending<T> {
    pub fn pair() -> (Self, Future<T>) {
        let (promise, future) = Promise::pair();
        (Self { promise }, future)
    }

    /// First call wins; returns whether this call resolved it.
    pub fn resolve(&self, value: T) -> bool {
        self.promise.resolve(value)
    }

    pub fn is_resolved(&self) -> bool {
        self.promise.is_resolved()
    }
}

#[derive(Debug, Default)]
struct CountdownState {
    outstanding: HashSet<Uuid>,
    succeeded: Vec<Uuid>,
    failed: Vec<Uuid>,
}

/// Multi-target correlation.
#[derive(Debug)]
pub struct Countdown {
    state: Mutex<CountdownState>,
    done: Promise<()>,
}

impl Countdown {
    /// With no targets the returned future is already complete.
    pub fn new(targets: impl IntoIterator<Item = Uuid>) -> (Arc<Self>, Future<()>) {
        let (done, future) = Promise::pair();
        let outstanding: HashSet<Uuid> = targets.into_iter().collect();
        if outstanding.is_empty() {
            done.resolve(());
        }
        let countdown = Arc::new(Self {
            state: Mutex::new(CountdownState {
                outstanding,
                ..CountdownState::default()
            }),
            done,
        });
        (countdown, future)
    }

    /// Record the result for `id`.  Returns `false` when `id` is not a
    /// target or already reported.
    pub fn report(&self, id: Uuid, success: bool) -> bool {
        let mut state = self.state.lock();
        if !state.outstanding.remove(&id) {
            return false;
        }
        if success {
            state.succeeded.push(id);
        } else {
            state.failed.push(id);
        }
        if state.outstanding.is_empty() {
            self.done.resolve(());
        }
        true
    }

    /// Targets that reported success so far, in report order.
    pub fn succeeded(&self) -> Vec<Uuid> {
        self.state.lock().succeeded.clone()
    }

    pub fn failed(&self) -> Vec<Uuid> {
        self.state.lock().failed.clone()
    }

    pub fn outstanding(&self) -> usize {
        self.state.lock().outstanding.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancelHandle;

    const LONG: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn resolved_value_wins() {
        let (pending, future) = Pending::pair();
        assert!(pending.resolve(true));
        assert!(!pending.resolve(false));
        assert_eq!(settle(future, LONG, &CancelSignal::never()).await, Settled::Resolved(true));
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_fires_without_resolution() {
        let (_pending, future) = Pending::<bool>::pair();
        let started = tokio::time::Instant::now();
        let settled = settle(future, Duration::from_secs(3), &CancelSignal::never()).await;
        assert_eq!(settled, Settled::TimedOut);
        assert!(started.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_beats_timeout() {
        let (_pending, future) = Pending::<bool>::pair();
        let handle = CancelHandle::new();
        handle.cancel();
        let started = tokio::time::Instant::now();
        let settled = settle(future, LONG, &handle.signal()).await;
        assert_eq!(settled, Settled::Cancelled);
        assert!(started.elapsed() < LONG);
    }

    #[tokio::test]
    async fn dropped_producer_is_abandoned() {
        let (pending, future) = Pending::<bool>::pair();
        drop(pending);
        assert_eq!(settle(future, LONG, &CancelSignal::never()).await, Settled::Abandoned);
    }

    #[test]
    fn zero_timeout_is_invalid() {
        assert!(matches!(
            ensure_timeout(Duration::ZERO),
            Err(Error::InvalidArgument(_))
        ));
        assert!(ensure_timeout(Duration::from_millis(1)).is_ok());
    }

    #[tokio::test]
    async fn countdown_completes_when_all_report() {
        let a = Uuid::from_u128(1);
        let b = Uuid::from_u128(2);
        let (countdown, future) = Countdown::new([a, b]);
        assert!(countdown.report(a, true));
        assert!(!countdown.report(a, true));
        assert!(!countdown.report(Uuid::from_u128(3), true));
        assert_eq!(countdown.outstanding(), 1);
        assert!(countdown.report(b, false));
        assert_eq!(settle(future, LONG, &CancelSignal::never()).await, Settled::Resolved(()));
        assert_eq!(countdown.succeeded(), vec![a]);
        assert_eq!(countdown.failed(), vec![b]);
    }

    #[tokio::test]
    async fn empty_countdown_is_complete() {
        let (countdown, future) = Countdown::new([]);
        assert_eq!(settle(future, LONG, &CancelSignal::never()).await, Settled::Resolved(()));
        assert!(countdown.succeeded().is_empty());
    }

    #[test]
    fn concurrent_reports_are_not_lost() {
        let ids: Vec<Uuid> = (0..64u128).map(Uuid::from_u128).collect();
        let (countdown, _future) = Countdown::new(ids.clone());
        let threads: Vec<_> = ids
            .chunks(8)
            .map(|chunk| {
                let countdown = Arc::clone(&countdown);
                let chunk = chunk.to_vec();
                std::thread::spawn(move || {
                    for id in chunk {
                        countdown.report(id, true);
                    }
                })
            })
            .collect();
        for thread in threads {
            thread.join().unwrap();
        }
        assert_eq!(countdown.outstanding(), 0);
        assert_eq!(countdown.succeeded().len(), 64);
    }
}
