use thiserror::Error;

pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation cancelled")]
pub struct Cancelled;

/// Polled by a frame sweep to decide whether to abandon it early.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn never_cancel_is_never_cancelled() {
        assert!(!NeverCancel.is_cancelled());
    }

    #[test]
    fn closure_token_cancels_superseded_frame() {
        // a newer frame request bumps the generation, stranding the old sweep
        let latest_generation = AtomicU64::new(1);
        let frame_generation = 1;
        let token = || latest_generation.load(Ordering::Relaxed) != frame_generation;

        assert!(!token.is_cancelled());

        latest_generation.store(2, Ordering::Relaxed);
        assert!(token.is_cancelled());
    }

    #[test]
    fn cancelled_displays_reason() {
        assert_eq!(Cancelled.to_string(), "operation cancelled");
    }
}
