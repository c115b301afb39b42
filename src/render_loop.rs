//! Main-context loop that owns the counter and drives the matrix.

use crate::config::HEARTBEAT_HALF_PERIOD_MS;
use crate::digit::Digit;
use crate::mailbox::ActionMailbox;
use crate::matrix::{MatrixRenderer, PixelSink};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Polls the mailbox, applies actions to the counter and redraws the matrix.
///
/// The counter is only ever read and written here. Interrupts may fire during
/// any of the busy-wait delays; whatever they publish is picked up on the
/// next [`service`](Self::service).
///
/// # Type Parameters
/// * `'m` - Lifetime of the shared mailbox (usually `'static`)
/// * `S` - LED strip transport
/// * `D` - Busy-wait delay provider
/// * `H` - Heartbeat LED pin
pub struct RenderLoop<'m, S: PixelSink, D: DelayNs, H: OutputPin> {
    mailbox: &'m ActionMailbox,
    renderer: MatrixRenderer<S>,
    delay: D,
    heartbeat: H,
    heartbeat_half_period_ms: u32,
    digit: Digit,
}

impl<'m, S: PixelSink, D: DelayNs, H: OutputPin> RenderLoop<'m, S, D, H> {
    /// Creates a loop showing [`Digit::ZERO`]. Nothing is drawn until
    /// [`start`](Self::start) or the first serviced action.
    pub fn new(mailbox: &'m ActionMailbox, renderer: MatrixRenderer<S>, delay: D, heartbeat: H) -> Self {
        Self {
            mailbox,
            renderer,
            delay,
            heartbeat,
            heartbeat_half_period_ms: HEARTBEAT_HALF_PERIOD_MS,
            digit: Digit::ZERO,
        }
    }

    /// Overrides the heartbeat half-period.
    pub fn with_heartbeat_half_period_ms(mut self, millis: u32) -> Self {
        self.heartbeat_half_period_ms = millis;
        self
    }

    /// Starts from `digit` instead of zero.
    pub fn with_initial_digit(mut self, digit: Digit) -> Self {
        self.digit = digit;
        self
    }

    /// Draws the current digit. Call once after bring-up.
    pub fn start(&mut self) {
        self.renderer.render(self.digit, &mut self.delay);
    }

    /// Checks the dirty flag once.
    ///
    /// If an action is waiting it is consumed, applied to the counter and the
    /// new digit is drawn. At most one change is applied per call; presses
    /// that overwrote each other in the mailbox are not replayed.
    ///
    /// # Returns
    /// * `Some(digit)` - The counter changed and the matrix was redrawn
    /// * `None` - The mailbox was clean
    pub fn service(&mut self) -> Option<Digit> {
        let action = self.mailbox.take()?;
        self.digit = self.digit.apply(action);

        #[cfg(feature = "defmt")]
        defmt::info!("current digit: {}", self.digit);

        self.renderer.render(self.digit, &mut self.delay);
        Some(self.digit)
    }

    /// Blinks the heartbeat LED once: on for a half-period, then off for one.
    ///
    /// Pin errors are ignored; the heartbeat is only a liveness hint.
    pub fn toggle_heartbeat(&mut self) {
        let _ = self.heartbeat.set_high();
        self.delay.delay_ms(self.heartbeat_half_period_ms);
        let _ = self.heartbeat.set_low();
        self.delay.delay_ms(self.heartbeat_half_period_ms);
    }

    /// One loop iteration: heartbeat, then a single [`service`](Self::service).
    pub fn tick(&mut self) -> Option<Digit> {
        self.toggle_heartbeat();
        self.service()
    }

    /// Runs the loop forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
        }
    }

    /// Digit currently shown.
    pub fn digit(&self) -> Digit {
        self.digit
    }

    /// Returns a reference to the renderer.
    pub fn renderer(&self) -> &MatrixRenderer<S> {
        &self.renderer
    }

    /// Returns a reference to the delay provider.
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Returns a reference to the heartbeat pin.
    pub fn heartbeat(&self) -> &H {
        &self.heartbeat
    }
}
