//! Compiled-in configuration.
//!
//! Everything here is a default. Constructors pick these up and the `with_*`
//! builder methods override them where a board needs something different.

/// Minimum time between two accepted presses of the same button.
pub const DEBOUNCE_WINDOW_MS: u64 = 200;

/// Time the heartbeat LED spends in each state. One full blink is twice this.
pub const HEARTBEAT_HALF_PERIOD_MS: u32 = 100;

/// Hold time after the last pixel of a frame before the strip latches it.
pub const SETTLE_DELAY_US: u32 = 50;

/// Matrix width in cells.
pub const MATRIX_WIDTH: usize = 5;

/// Matrix height in cells.
pub const MATRIX_HEIGHT: usize = 5;

/// Number of cells (and therefore pixel writes) per frame.
pub const CELL_COUNT: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

/// GPIO of the increment button.
pub const BUTTON_A_PIN: u8 = 5;

/// GPIO of the decrement button.
pub const BUTTON_B_PIN: u8 = 6;

/// GPIO driving the data line of the LED matrix.
pub const MATRIX_DATA_PIN: u8 = 7;

/// GPIO of the heartbeat LED.
pub const HEARTBEAT_LED_PIN: u8 = 13;
