//! WS2812 matrix as a [`PixelSink`].
//!
//! The bit timing runs on a PIO state machine via `ws2812-pio`. Pixels are
//! written one at a time as the renderer produces them; the renderer's settle
//! delay after the last cell provides the latch gap.

use digit_matrix::PixelSink;
use fugit::HertzU32;
use rp_pico::hal::gpio::AnyPin;
use rp_pico::hal::pio::{PIO, PIOExt, StateMachineIndex, UninitStateMachine};
use smart_leds_trait::{RGB8, SmartLedsWrite};
use ws2812_pio::Ws2812Direct;

/// Strip driver taking GRB-packed words, as [`MatrixRenderer`] sends by default.
///
/// [`MatrixRenderer`]: digit_matrix::MatrixRenderer
pub struct Ws2812Matrix<P, SM, I>
where
    P: PIOExt,
    SM: StateMachineIndex,
    I: AnyPin<Function = P::PinFunction>,
{
    driver: Ws2812Direct<P, SM, I>,
}

impl<P, SM, I> Ws2812Matrix<P, SM, I>
where
    P: PIOExt,
    SM: StateMachineIndex,
    I: AnyPin<Function = P::PinFunction>,
{
    /// Installs the WS2812 program on `sm` and drives the strip on `pin`.
    ///
    /// `clock_freq` is the peripheral clock feeding the PIO block.
    pub fn new(
        pin: I,
        pio: &mut PIO<P>,
        sm: UninitStateMachine<(P, SM)>,
        clock_freq: HertzU32,
    ) -> Self {
        Self {
            driver: Ws2812Direct::new(pin, pio, sm, clock_freq),
        }
    }
}

/// Splits a `(g << 16) | (r << 8) | b` word back into channels.
fn unpack_grb(color: u32) -> RGB8 {
    RGB8::new((color >> 8) as u8, (color >> 16) as u8, color as u8)
}

impl<P, SM, I> PixelSink for Ws2812Matrix<P, SM, I>
where
    P: PIOExt,
    SM: StateMachineIndex,
    I: AnyPin<Function = P::PinFunction>,
{
    fn send_pixel(&mut self, color: u32) {
        // The driver reorders to GRB on the wire
        let _ = self.driver.write(core::iter::once(unpack_grb(color)));
    }
}
