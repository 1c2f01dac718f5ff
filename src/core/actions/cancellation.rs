//! Cooperative cancellation for long renders.
//!
//! Render loops poll a [`CancelToken`] between batches of pixels and stop with
//! [`Cancelled`] once it fires. Nothing is interrupted preemptively.

use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// How many pixels a worker computes between two polls of its cancel token.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

/// A render stopped early because its token fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render cancelled")
    }
}

impl Error for Cancelled {}

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

/// Token for renders that must run to completion, such as batch renders.
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

/// Fires once a newer render generation has been requested or shutdown has
/// been signalled.
#[derive(Debug, Clone, Copy)]
pub struct GenerationToken<'a> {
    generation: u64,
    latest_generation: &'a AtomicU64,
    shutdown: &'a AtomicBool,
}

impl<'a> GenerationToken<'a> {
    #[must_use]
    pub fn new(generation: u64, latest_generation: &'a AtomicU64, shutdown: &'a AtomicBool) -> Self {
        Self {
            generation,
            latest_generation,
            shutdown,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while no newer generation has been requested.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.latest_generation.load(Ordering::Acquire) == self.generation
    }
}

impl CancelToken for GenerationToken<'_> {
    fn is_cancelled(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed)
            || self.latest_generation.load(Ordering::Relaxed) != self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_cancel_stays_false() {
        assert!(!NeverCancel.is_cancelled());
    }

    #[test]
    fn test_closure_token_follows_flag() {
        let flag = AtomicBool::new(false);
        let token = || flag.load(Ordering::Relaxed);
        assert!(!token.is_cancelled());

        flag.store(true, Ordering::Relaxed);

        assert!(token.is_cancelled());
    }

    #[test]
    fn test_generation_token_fires_on_newer_generation() {
        let latest = AtomicU64::new(3);
        let shutdown = AtomicBool::new(false);
        let token = GenerationToken::new(3, &latest, &shutdown);
        assert!(!token.is_cancelled());
        assert!(token.is_current());

        latest.store(4, Ordering::SeqCst);

        assert!(token.is_cancelled());
        assert!(!token.is_current());
        assert_eq!(token.generation(), 3);
    }

    #[test]
    fn test_generation_token_fires_on_shutdown() {
        let latest = AtomicU64::new(1);
        let shutdown = AtomicBool::new(false);
        let token = GenerationToken::new(1, &latest, &shutdown);

        shutdown.store(true, Ordering::SeqCst);

        assert!(token.is_cancelled());
        assert!(token.is_current());
    }

    #[test]
    fn test_cancelled_display() {
        assert_eq!(Cancelled.to_string(), "render cancelled");
    }
}
