//! # Refresh Coordinator
//!
//! Serializes token refreshes and coalesces concurrent ones.
//!
//! Every request records the coordinator's epoch right before it is sent.
//! When it comes back 401 it calls [`RefreshCoordinator::refresh_after`] with
//! that epoch:
//!
//! ```text
//! request A ──401──► lock ─► epoch unchanged ─► run refresh ─► epoch += 1 ─► unlock
//! request B ──401──► lock (waits for A) ──────► epoch changed ─► reuse A's outcome
//! ```
//!
//! So at most one refresh is in flight, and requests that failed with a token
//! that has since been replaced retry against the replacement instead of
//! refreshing again. If the refresh future is dropped (caller gave up) the
//! lock is released with the epoch untouched; the next 401 simply refreshes.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::core::error::AuthError;

/// Coordinates refresh attempts across concurrent requests.
#[derive(Debug, Default)]
pub struct RefreshCoordinator {
    epoch: AtomicU64,
    /// Outcome of the most recent completed refresh.
    last_outcome: Mutex<Option<Result<(), AuthError>>>,
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of refreshes completed so far.
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::Acquire)
    }

    /// Run `refresh` unless a refresh completed after `seen_epoch`, in which
    /// case its outcome is returned instead.
    pub async fn refresh_after<F, Fut>(&self, seen_epoch: u64, refresh: F) -> Result<(), AuthError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), AuthError>>,
    {
        let mut last_outcome = self.last_outcome.lock().await;

        if self.epoch() != seen_epoch {
            if let Some(outcome) = last_outcome.as_ref() {
                tracing::debug!(
                    seen_epoch,
                    epoch = self.epoch(),
                    refreshed = outcome.is_ok(),
                    "Reusing outcome of concurrent token refresh"
                );
                return outcome.clone();
            }
        }

        let outcome = refresh().await;
        *last_outcome = Some(outcome.clone());
        self.epoch.fetch_add(1, Ordering::AcqRel);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    #[tokio::test]
    async fn test_first_caller_runs_refresh() {
        let coordinator = RefreshCoordinator::new();
        let calls = AtomicUsize::new(0);
        let counter = &calls;

        let outcome = coordinator
            .refresh_after(0, move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .await;

        assert_eq!(outcome, Ok(()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(coordinator.epoch(), 1);
    }

    #[tokio::test]
    async fn test_stale_epoch_reuses_outcome() {
        let coordinator = RefreshCoordinator::new();
        coordinator
            .refresh_after(0, || async { Err(AuthError::RefreshRejected { status: 401 }) })
            .await
            .unwrap_err();

        let calls = AtomicUsize::new(0);
        let counter = &calls;
        let outcome = coordinator
            .refresh_after(0, move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .await;

        assert_eq!(outcome, Err(AuthError::RefreshRejected { status: 401 }));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(coordinator.epoch(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_refresh() {
        let coordinator = RefreshCoordinator::new();
        let calls = AtomicUsize::new(0);
        let counter = &calls;
        let seen = coordinator.epoch();

        let refresh = move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok(())
        };

        let (a, b, c) = tokio::join!(
            coordinator.refresh_after(seen, refresh),
            coordinator.refresh_after(seen, refresh),
            coordinator.refresh_after(seen, refresh),
        );

        assert_eq!((a, b, c), (Ok(()), Ok(()), Ok(())));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(coordinator.epoch(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_refresh_leaves_epoch_untouched() {
        let coordinator = RefreshCoordinator::new();

        let slow = coordinator.refresh_after(0, || async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        });
        assert!(tokio::time::timeout(Duration::from_millis(10), slow).await.is_err());
        assert_eq!(coordinator.epoch(), 0);

        let outcome = coordinator.refresh_after(0, || async { Ok(()) }).await;
        assert_eq!(outcome, Ok(()));
        assert_eq!(coordinator.epoch(), 1);
    }
}
