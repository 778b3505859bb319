// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.
// https://github.com/bad-antics/smartguard-rs

//! Tick scheduler for the sensor simulator

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Monotonic time source
pub trait Clock {
    /// Time elapsed since the clock started
    fn now(&self) -> Duration;
}

/// Wall clock
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
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
        self.start.elapsed()
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock()
    }
}

/// Fixed-period tick source. The caller polls and runs the due ticks itself,
/// so ticks always execute on the caller's thread.
pub struct TickScheduler<C: Clock> {
    clock: C,
    period: Duration,
    next_due: Duration,
    running: bool,
}

impl<C: Clock> TickScheduler<C> {
    /// First tick is due one period after creation. `period` must be non-zero.
    pub fn new(clock: C, period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        let next_due = clock.now().saturating_add(period);
        debug!("Scheduled simulator tick every {:?}", period);
        Self {
            clock,
            period,
            next_due,
            running: true,
        }
    }

    /// Number of ticks that fell due since the last poll
    pub fn poll(&mut self) -> u32 {
        if !self.running {
            return 0;
        }
        let now = self.clock.now();
        let mut due = 0;
        while self.next_due <= now && self.next_due != Duration::MAX {
            due += 1;
            self.next_due = self.next_due.saturating_add(self.period);
        }
        due
    }

    /// Zero when a tick is already due or the scheduler is stopped
    pub fn time_until_next(&self) -> Duration {
        if !self.running {
            return Duration::ZERO;
        }
        self.next_due.saturating_sub(self.clock.now())
    }

    pub fn stop(&mut self) {
        if self.running {
            debug!("Simulator tick stopped");
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
