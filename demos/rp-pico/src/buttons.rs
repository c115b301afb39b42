//! The two board buttons as interrupt sources.

use digit_matrix::{Button, ButtonPins, EdgeMask};
use embedded_hal::digital::InputPin;
use rp_pico::hal::gpio::bank0::{Gpio5, Gpio6};
use rp_pico::hal::gpio::{FunctionSioInput, Interrupt, Pin, PinId, PullUp};

pub type ButtonAPin = Pin<Gpio5, FunctionSioInput, PullUp>;
pub type ButtonBPin = Pin<Gpio6, FunctionSioInput, PullUp>;

/// Button pins with edge interrupts enabled on both transitions.
pub struct BoardButtons {
    a: ButtonAPin,
    b: ButtonBPin,
}

impl BoardButtons {
    /// Enables falling and rising edge interrupts on both pins.
    ///
    /// The `IO_IRQ_BANK0` line still has to be unmasked in the NVIC.
    pub fn new(mut a: ButtonAPin, mut b: ButtonBPin) -> Self {
        enable_edges(&mut a);
        enable_edges(&mut b);
        Self { a, b }
    }

    /// Reads and acknowledges the latched edges of `button`.
    pub fn take_edges(&mut self, button: Button) -> EdgeMask {
        match button {
            Button::A => take_edges(&mut self.a),
            Button::B => take_edges(&mut self.b),
        }
    }
}

impl ButtonPins for BoardButtons {
    fn is_low(&mut self, button: Button) -> bool {
        match button {
            Button::A => self.a.is_low().unwrap_or(false),
            Button::B => self.b.is_low().unwrap_or(false),
        }
    }
}

fn enable_edges<I: PinId>(pin: &mut Pin<I, FunctionSioInput, PullUp>) {
    pin.set_interrupt_enabled(Interrupt::EdgeLow, true);
    pin.set_interrupt_enabled(Interrupt::EdgeHigh, true);
}

fn take_edges<I: PinId>(pin: &mut Pin<I, FunctionSioInput, PullUp>) -> EdgeMask {
    let mut edges = EdgeMask::default();
    if pin.interrupt_status(Interrupt::EdgeLow) {
        pin.clear_interrupt(Interrupt::EdgeLow);
        edges = edges | EdgeMask::FALL;
    }
    if pin.interrupt_status(Interrupt::EdgeHigh) {
        pin.clear_interrupt(Interrupt::EdgeHigh);
        edges = edges | EdgeMask::RISE;
    }
    edges
}
