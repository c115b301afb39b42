#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Digit`**: The counter value, always `0..=9`, wrapping in both directions
//! - **`GLYPHS`**: One 5x5 pattern plus color per digit
//! - **`ActionMailbox`**: Single-slot handoff of a `PendingAction` from interrupt to main loop
//! - **`InputController`**: Debounced press detection, called from the GPIO interrupt
//! - **`RenderLoop`**: Owns the counter, polls the mailbox, blinks the heartbeat LED
//! - **`MatrixRenderer`**: Streams a digit's glyph to the strip in raster order
//! - **`PixelSink`**: Trait to implement for your LED strip transport
//! - **`ButtonPins`**: Trait to implement for reading the button levels
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Colors are `Srgb<u8>` and reach the strip packed into 24-bit words
//! (GRB by default, see `ColorOrder`).

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod config;
pub mod time;
pub mod digit;
pub mod glyph;
pub mod mailbox;
pub mod input;
pub mod matrix;
pub mod render_loop;

pub use digit::{Digit, DigitError};
pub use glyph::{COLOR_OFF, ColorOrder, GLYPH_COLOR, GLYPHS, Glyph};
pub use mailbox::{ActionMailbox, PendingAction};
pub use input::{Button, ButtonMap, ButtonPair, ButtonPins, EdgeMask, EdgeOutcome, InputController};
pub use matrix::{MatrixRenderer, PixelSink};
pub use render_loop::RenderLoop;
pub use time::{TimeDuration, TimeInstant, TimeSource};
