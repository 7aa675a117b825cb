//! Per-factory sequence counters.
//!
//! Every sequence-bearing factory owns one `Sequence`. Each build or create invocation
//! draws exactly one value from it, whether or not the result is ever persisted, and the
//! value is formatted into generated fields such as `"foo{n}"`.

use std::sync::atomic::{AtomicU64, Ordering};

/// Default first value issued by a sequence.
pub const DEFAULT_BASE: u64 = 1;

/// Monotonic counter feeding generated field values.
///
/// Values issued between two resets are strictly increasing and contiguous, starting at
/// the base. The counter is atomic so a factory can be shared by reference.
#[derive(Debug)]
pub struct Sequence {
    base: u64,
    next: AtomicU64,
}

impl Sequence {
    /// Creates a sequence whose first value is `base`.
    pub const fn new(base: u64) -> Self {
        Self {
            base,
            next: AtomicU64::new(base),
        }
    }

    /// Returns the next value and advances the counter by one.
    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    /// Returns the value the next call to `next()` will issue without consuming it.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }

    /// The value the sequence starts from and returns to on `reset()`.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Restores the counter to its base value.
    pub fn reset(&self) {
        tracing::debug!(base = self.base, "Resetting sequence");
        self.next.store(self.base, Ordering::SeqCst);
    }

    /// Restarts the counter at `value` without changing the base.
    ///
    /// Used by store-aware resets, which continue after the highest persisted key.
    pub fn reset_to(&self, value: u64) {
        tracing::debug!(value, "Restarting sequence");
        self.next.store(value, Ordering::SeqCst);
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new(DEFAULT_BASE)
    }
}
