//! RP2040 timer as the debounce clock.

use digit_matrix::{TimeDuration, TimeInstant, TimeSource};
use fugit::{MicrosDurationU64, TimerInstantU64};
use rp_pico::hal::Timer;

/// Duration type backed by fugit microsecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration(MicrosDurationU64);

impl TimeDuration for Duration {
    fn as_millis(&self) -> u64 {
        self.0.to_millis()
    }

    fn from_millis(millis: u64) -> Self {
        Duration(MicrosDurationU64::millis(millis))
    }
}

/// Instant type backed by fugit timer instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant(TimerInstantU64<1_000_000>);

impl TimeInstant for Instant {
    type Duration = Duration;

    /// Microseconds elapsed since `earlier`.
    ///
    /// The RP2040 timer is a 64-bit microsecond counter and does not wrap
    /// within the life of the device, so no wrapping subtraction is needed.
    /// An `earlier` from the future yields zero, which the controller treats
    /// as inside the debounce window.
    fn duration_since(&self, earlier: Self) -> Self::Duration {
        let ticks = self.0.ticks().saturating_sub(earlier.0.ticks());
        Duration(MicrosDurationU64::from_ticks(ticks))
    }
}

/// Time source wrapper around the RP2040 timer
///
/// `Timer` is `Copy`, so the interrupt side and the main loop can each hold
/// their own handle to the same counter.
#[derive(Clone, Copy)]
pub struct HardwareTimer {
    timer: Timer,
}

impl HardwareTimer {
    /// Create a new hardware timer wrapper
    pub fn new(timer: Timer) -> Self {
        Self { timer }
    }
}

impl TimeSource<Instant> for HardwareTimer {
    fn now(&self) -> Instant {
        Instant(self.timer.get_counter())
    }
}
