//! The counter value shown on the matrix.

use crate::mailbox::PendingAction;

/// A single decimal digit, always in `0..=9`.
///
/// Arithmetic wraps in both directions, so a `Digit` can never leave its
/// range and glyph lookups indexed by it are always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// The digit shown at power-up.
    pub const ZERO: Digit = Digit(0);

    /// The largest digit.
    pub const MAX: Digit = Digit(9);

    /// Creates a digit, rejecting values above 9.
    pub const fn new(value: u8) -> Result<Self, DigitError> {
        if value <= Self::MAX.0 {
            Ok(Digit(value))
        } else {
            Err(DigitError::OutOfRange(value))
        }
    }

    /// Returns the numeric value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Next digit, 9 wraps to 0.
    #[inline]
    pub const fn increment(self) -> Self {
        Digit((self.0 + 1) % 10)
    }

    /// Previous digit, 0 wraps to 9.
    #[inline]
    pub const fn decrement(self) -> Self {
        if self.0 == 0 { Self::MAX } else { Digit(self.0 - 1) }
    }

    /// Applies a button action. `PendingAction::None` leaves the digit as is.
    pub const fn apply(self, action: PendingAction) -> Self {
        match action {
            PendingAction::None => self,
            PendingAction::Increment => self.increment(),
            PendingAction::Decrement => self.decrement(),
        }
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl core::fmt::Display for Digit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from constructing a [`Digit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitError {
    /// The value is not a single decimal digit.
    OutOfRange(u8),
}

impl core::fmt::Display for DigitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DigitError::OutOfRange(value) => {
                write!(f, "{} is not a single decimal digit (expected 0-9)", value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DigitError {}
