//! Time sources for bonus timers.
//!
//! Bonus time is derived lazily from clock reads taken inside state
//! transitions; nothing polls. A `Clock` reports monotonic time since its
//! own origin, so card timestamps are plain `Duration`s.
//!
//! ```
//! use std::time::Duration;
//! use memorize::core::{Clock, ManualClock};
//!
//! let clock = ManualClock::new();
//! let shared = clock.clone();
//!
//! clock.advance(Duration::from_secs(2));
//! assert_eq!(shared.now(), Duration::from_secs(2));
//! ```

use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock: Debug {
    /// Time elapsed since this clock's origin.
    fn now(&self) -> Duration;
}

/// Wall-clock time backed by `Instant`.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually driven clock.
///
/// Clones share the same time, so a test can hand one clone to a session
/// and advance the other. Starts at zero and only moves when told to.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Create a clock frozen at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Jump to an absolute time. Callers must not move backwards.
    pub fn set(&self, to: Duration) {
        debug_assert!(to >= self.now.get(), "ManualClock must stay monotonic");
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
