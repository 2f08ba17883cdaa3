//! Monotonic time source for the game timer.

use core::time::Duration;

/// A monotonic clock. `now` is measured from an arbitrary fixed origin.
pub trait Clock: Send {
    fn now(&self) -> Duration;
}

/// Wall-clock implementation backed by [`std::time::Instant`].
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Interval timer: started when shooting begins, stopped at game over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stopwatch {
    started: Option<Duration>,
    stopped: Option<Duration>,
}

impl Stopwatch {
    pub fn start(&mut self, now: Duration) {
        self.started = Some(now);
        self.stopped = None;
    }

    pub fn stop(&mut self, now: Duration) {
        if self.started.is_some() && self.stopped.is_none() {
            self.stopped = Some(now);
        }
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some() && self.stopped.is_none()
    }

    /// Time between start and stop (or `now` while running).
    pub fn elapsed(&self, now: Duration) -> Duration {
        match (self.started, self.stopped) {
            (Some(start), Some(end)) => end.saturating_sub(start),
            (Some(start), None) => now.saturating_sub(start),
            _ => Duration::ZERO,
        }
    }
}
