//! Time abstraction traits for platform-agnostic timing.
//!
//! The input controller only needs a monotonic millisecond clock. These traits
//! let the platform supply one without the core depending on a specific HAL.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

impl<I: TimeInstant, T: TimeSource<I> + ?Sized> TimeSource<I> for &T {
    #[inline]
    fn now(&self) -> I {
        (**self).now()
    }
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations backed by a wrapping counter should use wrapping
    /// subtraction so that the debounce check keeps working across rollover.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
