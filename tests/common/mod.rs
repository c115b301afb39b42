//! Shared test infrastructure for digit-matrix integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use core::convert::Infallible;
use digit_matrix::config::CELL_COUNT;
use digit_matrix::{Button, ButtonPins, PixelSink, TimeDuration, TimeInstant, TimeSource};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, millis: u64) {
        self.current_time.set(TestInstant(millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Buttons
// ============================================================================

/// Button levels the test can change while the controller holds a reference
pub struct MockPins {
    a_low: Cell<bool>,
    b_low: Cell<bool>,
}

impl MockPins {
    /// Both buttons released (pulled high)
    pub fn new() -> Self {
        Self {
            a_low: Cell::new(false),
            b_low: Cell::new(false),
        }
    }

    pub fn press(&self, button: Button) {
        self.level(button).set(true);
    }

    pub fn release(&self, button: Button) {
        self.level(button).set(false);
    }

    fn level(&self, button: Button) -> &Cell<bool> {
        match button {
            Button::A => &self.a_low,
            Button::B => &self.b_low,
        }
    }
}

impl ButtonPins for &MockPins {
    fn is_low(&mut self, button: Button) -> bool {
        self.level(button).get()
    }
}

/// Single `embedded-hal` input pin with a fixed level
pub struct MockInputPin {
    pub low: bool,
}

impl ErrorType for MockInputPin {
    type Error = Infallible;
}

impl InputPin for MockInputPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.low)
    }
}

/// Input pin whose reads always fail
pub struct FaultyInputPin;

#[derive(Debug)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl ErrorType for FaultyInputPin {
    type Error = PinFault;
}

impl InputPin for FaultyInputPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }
}

// ============================================================================
// Mock LED Strip
// ============================================================================

/// Pixel sink that records every word sent
pub struct MockPixelSink {
    pixels: heapless::Vec<u32, 512>,
}

impl MockPixelSink {
    pub fn new() -> Self {
        Self {
            pixels: heapless::Vec::new(),
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Number of complete frames received
    pub fn frame_count(&self) -> usize {
        self.pixels.len() / CELL_COUNT
    }

    /// The most recent complete frame
    pub fn last_frame(&self) -> &[u32] {
        let end = self.frame_count() * CELL_COUNT;
        &self.pixels[end - CELL_COUNT..end]
    }
}

impl PixelSink for MockPixelSink {
    fn send_pixel(&mut self, color: u32) {
        self.pixels.push(color).expect("mock pixel buffer full");
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay that returns immediately and accumulates the requested time
pub struct MockDelay {
    total_ns: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self { total_ns: 0 }
    }

    pub fn total_us(&self) -> u64 {
        self.total_ns / 1_000
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}

// ============================================================================
// Mock Heartbeat LED
// ============================================================================

/// Output pin that records every level written
pub struct MockOutputPin {
    history: heapless::Vec<bool, 64>,
}

impl MockOutputPin {
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
        }
    }

    pub fn history(&self) -> &[bool] {
        &self.history
    }
}

impl ErrorType for MockOutputPin {
    type Error = Infallible;
}

impl OutputPin for MockOutputPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let _ = self.history.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let _ = self.history.push(true);
        Ok(())
    }
}
