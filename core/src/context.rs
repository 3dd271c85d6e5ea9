//! Per-call cancellation and deadline.
//!
//! # Design
//! A `Context` pairs a `CancellationToken` with an optional deadline. Every
//! client operation takes one as its first argument, checks it before
//! opening a connection, and races the in-flight request against
//! [`Context::done`]. Cloning a context shares the same token.

use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Why a context is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("context canceled")]
    Canceled,

    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

#[derive(Debug, Clone, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never canceled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context driven by the caller's token.
    pub fn new(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Keeps the earlier of the existing deadline and `deadline`.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// A context canceled together with this one, and also on its own token.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// `Some` once the context is done. Cancellation wins over an expired deadline.
    pub fn err(&self) -> Option<ContextError> {
        if self.token.is_cancelled() {
            return Some(ContextError::Canceled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(ContextError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Resolves when the token is canceled or the deadline elapses.
    pub async fn done(&self) -> ContextError {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    _ = self.token.cancelled() => ContextError::Canceled,
                    _ = tokio::time::sleep_until(deadline) => ContextError::DeadlineExceeded,
                }
            }
            None => {
                self.token.cancelled().await;
                ContextError::Canceled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_is_never_done() {
        assert_eq!(Context::background().err(), None);
    }

    #[test]
    fn canceled_token_reports_canceled() {
        let ctx = Context::background();
        ctx.cancel();
        assert_eq!(ctx.err(), Some(ContextError::Canceled));
    }

    #[tokio::test]
    async fn past_deadline_reports_deadline_exceeded() {
        let ctx = Context::background().with_timeout(Duration::ZERO);
        assert_eq!(ctx.err(), Some(ContextError::DeadlineExceeded));
        assert_eq!(ctx.done().await, ContextError::DeadlineExceeded);
    }

    #[tokio::test]
    async fn earlier_deadline_wins() {
        let soon = Instant::now() + Duration::from_secs(1);
        let later = soon + Duration::from_secs(60);
        let ctx = Context::background().with_deadline(soon).with_deadline(later);
        assert_eq!(ctx.deadline(), Some(soon));
    }

    #[tokio::test]
    async fn child_follows_parent_cancellation() {
        let parent = Context::background();
        let child = parent.child();
        parent.cancel();
        assert_eq!(child.done().await, ContextError::Canceled);
    }

    #[tokio::test]
    async fn cancelling_child_leaves_parent_running() {
        let parent = Context::background();
        let child = parent.child();
        child.cancel();
        assert_eq!(child.err(), Some(ContextError::Canceled));
        assert_eq!(parent.err(), None);
    }

    #[test]
    fn error_wording() {
        assert_eq!(ContextError::Canceled.to_string(), "context canceled");
        assert_eq!(
            ContextError::DeadlineExceeded.to_string(),
            "context deadline exceeded"
        );
    }
}
