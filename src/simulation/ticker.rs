//! Fixed-rate tick scheduling
//!
//! The simulation loop blocks on [`TickClock::wait`] at the top of every
//! frame, so render cadence stays coupled 1:1 to physics cadence.
//! [`IntervalClock`] is the wall-clock implementation; [`ManualClock`] is a
//! no-wait stand-in so tests can drive deterministic ticks.

use std::thread;
use std::time::{Duration, Instant};

/// Gate for the start of each tick
pub trait TickClock {
    /// Block until the next tick boundary. The first call returns after one
    /// full period from construction.
    fn wait(&mut self);
}

/// Wall-clock scheduler firing at a fixed period
///
/// Deadlines advance by exactly one period per tick. If the loop falls more
/// than one period behind, the next deadline resynchronizes to now instead
/// of emitting a burst of catch-up ticks.
pub struct IntervalClock {
    period: Duration,
    next: Instant,
}

impl IntervalClock {
    pub fn new(period_secs: f32) -> Self {
        let period = Duration::from_secs_f32(period_secs);
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl TickClock for IntervalClock {
    fn wait(&mut self) {
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
        }
        self.next += self.period;
        if self.next < Instant::now() {
            // Fell behind; resync rather than burst
            self.next = Instant::now() + self.period;
        }
    }
}

/// Clock that never waits, for deterministic test runs
#[derive(Default)]
pub struct ManualClock;

impl TickClock for ManualClock {
    fn wait(&mut self) {}
}
