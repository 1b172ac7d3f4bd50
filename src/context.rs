//! Cooperative cancellation shared across one loop invocation.
//!
//! A context is threaded explicitly through every `execute` call rather than
//! living in ambient state. The dispatch loop checks it at each line boundary;
//! units are expected to check it before doing significant work.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use thiserror::Error;

/// Reason a context refused further work.
///
/// Surfaced as a distinct error so callers can tell "cancelled" apart from a
/// unit that failed for domain reasons (via `anyhow::Error::downcast_ref`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Cancellation {
    /// [`ExecContext::cancel`] was called on this context or a clone of it.
    #[error("execution cancelled")]
    Cancelled,
    /// The configured deadline passed.
    #[error("deadline exceeded")]
    DeadlineExceeded,
}

/// Cancellation signal and deadline shared by every command in one loop
/// invocation.
///
/// Clones share the same flag, so a clone held by the caller can stop a loop
/// running elsewhere. The deadline, if any, is fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct ExecContext {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl ExecContext {
    /// Context that never cancels on its own.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context that reports [`Cancellation::DeadlineExceeded`] once
    /// `deadline` passes.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Some(deadline),
        }
    }

    /// Signal cancellation to every holder of this context.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Current cancellation state, if any. An explicit cancel wins over an
    /// expired deadline when both apply.
    pub fn state(&self) -> Option<Cancellation> {
        if self.cancelled.load(Ordering::SeqCst) {
            return Some(Cancellation::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                Some(Cancellation::DeadlineExceeded)
            }
            _ => None,
        }
    }

    /// Fail with the cancellation reason if the context is no longer live.
    pub fn check(&self) -> Result<(), Cancellation> {
        match self.state() {
            Some(reason) => Err(reason),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn fresh_context_is_live() {
        let ctx = ExecContext::new();
        assert_eq!(ctx.state(), None);
        ctx.check().expect("live context");
    }

    #[test]
    fn cancel_is_visible_through_clones() {
        let ctx = ExecContext::new();
        let handle = ctx.clone();
        handle.cancel();
        assert_eq!(ctx.state(), Some(Cancellation::Cancelled));
        assert_eq!(ctx.check().unwrap_err(), Cancellation::Cancelled);
    }

    #[test]
    fn past_deadline_reports_deadline_exceeded() {
        let ctx = ExecContext::with_deadline(Instant::now());
        assert_eq!(ctx.check().unwrap_err(), Cancellation::DeadlineExceeded);
    }

    #[test]
    fn future_deadline_is_live() {
        let ctx = ExecContext::with_deadline(Instant::now() + Duration::from_secs(60));
        assert_eq!(ctx.state(), None);
    }

    #[test]
    fn explicit_cancel_wins_over_expired_deadline() {
        let ctx = ExecContext::with_deadline(Instant::now());
        ctx.cancel();
        assert_eq!(ctx.check().unwrap_err(), Cancellation::Cancelled);
    }
}
