//! Cancelable background tasks.
//!
//! A [`TaskHandle`] owns a tokio task and its [`CancellationToken`].
//! Dropping the handle cancels the task, so a view that goes away never
//! receives a late result.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::{CardError, CardResult};

pub struct TaskHandle<T> {
    token: CancellationToken,
    join: Option<JoinHandle<CardResult<T>>>,
}

impl<T: Send + 'static> TaskHandle<T> {
    /// Spawn `make(token)` on the current runtime.
    pub fn spawn<F, Fut>(make: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = CardResult<T>> + Send + 'static,
    {
        let token = CancellationToken::new();
        let fut = make(token.clone());
        let guard = token.clone();
        let join = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = guard.cancelled() => Err(CardError::Cancelled),
                result = fut => result,
            }
        });
        Self {
            token,
            join: Some(join),
        }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.join.as_ref().map_or(true, |j| j.is_finished())
    }

    /// Wait for the result. A cancelled or panicked task yields an error.
    pub async fn join(mut self) -> CardResult<T> {
        let Some(join) = self.join.take() else {
            return Err(CardError::Cancelled);
        };
        match join.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(CardError::Cancelled),
            Err(e) => Err(CardError::Storage(format!("task failed: {e}"))),
        }
    }
}

impl<T> Drop for TaskHandle<T> {
    fn drop(&mut self) {
        if self.join.as_ref().is_some_and(|j| !j.is_finished()) {
            tracing::trace!("Cancelling pending task on drop");
        }
        self.token.cancel();
    }
}

/// Sleep for `duration` unless `token` is cancelled first.
pub async fn delay(token: &CancellationToken, duration: Duration) -> CardResult<()> {
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(CardError::Cancelled),
        _ = tokio::time::sleep(duration) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_delay_completes() {
        let token = CancellationToken::new();
        assert!(delay(&token, Duration::from_millis(500)).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        assert!(matches!(
            delay(&token, Duration::from_secs(5)).await,
            Err(CardError::Cancelled)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_join_returns_value() {
        let handle = TaskHandle::spawn(|token| async move {
            delay(&token, Duration::from_millis(100)).await?;
            Ok(7)
        });
        assert_eq!(handle.join().await.unwrap(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_completion() {
        let handle = TaskHandle::spawn(|token| async move {
            delay(&token, Duration::from_secs(10)).await?;
            Ok(())
        });
        handle.cancel();
        assert!(matches!(handle.join().await, Err(CardError::Cancelled)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_callback() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        let handle = TaskHandle::spawn(move |token| async move {
            delay(&token, Duration::from_secs(1)).await?;
            flag.store(true, Ordering::SeqCst);
            Ok(())
        });
        let token = handle.token().clone();
        drop(handle);
        assert!(token.is_cancelled());
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }
}
