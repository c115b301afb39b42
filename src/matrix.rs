//! Streams digit glyphs to an addressable LED strip laid out as a matrix.

use crate::config::SETTLE_DELAY_US;
use crate::digit::Digit;
use crate::glyph::{self, ColorOrder};
use embedded_hal::delay::DelayNs;

/// Trait for abstracting the LED strip transport.
///
/// Implement this for whatever drives the strip's data line (PIO, SPI,
/// bit-banging). Each call sends one packed 24-bit color to the next cell and
/// blocks until the transport has accepted it. Handle any hardware errors
/// internally - this method cannot fail.
pub trait PixelSink {
    /// Sends one pixel. Only the low 24 bits of `color` are meaningful.
    fn send_pixel(&mut self, color: u32);
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    #[inline]
    fn send_pixel(&mut self, color: u32) {
        (**self).send_pixel(color)
    }
}

/// Renders one digit per frame onto a 5x5 matrix.
///
/// Holds no frame state: every call to [`render`](Self::render) sends a full
/// frame of 25 pixels in raster order followed by the settle delay.
pub struct MatrixRenderer<S: PixelSink> {
    sink: S,
    order: ColorOrder,
    settle_us: u32,
}

impl<S: PixelSink> MatrixRenderer<S> {
    /// Creates a renderer with GRB packing and the default settle delay.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            order: ColorOrder::default(),
            settle_us: SETTLE_DELAY_US,
        }
    }

    /// Overrides the byte order of packed pixel words.
    pub fn with_color_order(mut self, order: ColorOrder) -> Self {
        self.order = order;
        self
    }

    /// Overrides the hold time after each frame.
    pub fn with_settle_us(mut self, settle_us: u32) -> Self {
        self.settle_us = settle_us;
        self
    }

    /// Sends the glyph for `digit`, one write per cell, then waits out the
    /// settle delay.
    pub fn render<D: DelayNs>(&mut self, digit: Digit, delay: &mut D) {
        for pixel in glyph::for_digit(digit).pixels(self.order) {
            self.sink.send_pixel(pixel);
        }
        delay.delay_us(self.settle_us);
    }

    /// Byte order in use.
    pub fn color_order(&self) -> ColorOrder {
        self.order
    }

    /// Returns a reference to the transport.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns a mutable reference to the transport.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the renderer and returns the transport.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
