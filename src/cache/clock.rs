//! Clock Module
//!
//! Time source used by the cache to stamp entries and check expiry.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

// == Clock Trait ==
/// Supplies the current time in Unix milliseconds.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

// == System Clock ==
/// Wall clock backed by [`SystemTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        current_timestamp_ms()
    }
}

// == Manual Clock ==
/// Settable clock. Clones share the same underlying time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock starting at `secs` seconds.
    pub fn from_secs(secs: u64) -> Self {
        Self {
            now_ms: Arc::new(AtomicU64::new(secs * 1000)),
        }
    }

    /// Moves the clock to `secs` seconds.
    pub fn set_secs(&self, secs: u64) {
        self.now_ms.store(secs * 1000, Ordering::SeqCst);
    }

    /// Moves the clock to `ms` milliseconds.
    pub fn set_ms(&self, ms: u64) {
        self.now_ms.store(ms, Ordering::SeqCst);
    }

    /// Advances the clock by `secs` seconds.
    pub fn advance_secs(&self, secs: u64) {
        self.now_ms.fetch_add(secs * 1000, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A system clock set before the epoch reads as 0.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_after_epoch() {
        assert!(SystemClock.now_ms() > 0);
    }

    #[test]
    fn test_manual_clock_set_and_advance() {
        let clock = ManualClock::from_secs(100);
        assert_eq!(clock.now_ms(), 100_000);

        clock.advance_secs(10);
        assert_eq!(clock.now_ms(), 110_000);

        clock.set_ms(110_001);
        assert_eq!(clock.now_ms(), 110_001);
    }

    #[test]
    fn test_shared_dyn_clock() {
        let manual = ManualClock::from_secs(7);
        let clock: Arc<dyn Clock> = Arc::new(manual.clone());

        manual.advance_secs(1);
        assert_eq!(clock.now_ms(), 8_000);
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::from_secs(1);
        let other = clock.clone();

        other.set_secs(42);
        assert_eq!(clock.now_ms(), 42_000);
    }
}
