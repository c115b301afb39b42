//! Digit glyphs for the 5x5 matrix and color packing for the strip.
//!
//! Each glyph stores one byte per row, most significant of the low five bits
//! being the leftmost cell. Rows are listed top to bottom in the order the
//! cells are streamed to the strip, so the patterns already account for how
//! the matrix is wired on the board.

use crate::config::{CELL_COUNT, MATRIX_WIDTH};
use crate::digit::Digit;
use palette::Srgb;

/// Value sent for an unlit cell.
pub const COLOR_OFF: Srgb<u8> = Srgb::new(0, 0, 0);

/// Color of a lit cell (full red plus full green).
pub const GLYPH_COLOR: Srgb<u8> = Srgb::new(255, 255, 0);

/// Byte order of a packed 24-bit pixel word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorOrder {
    /// Green, red, blue. What WS2812-class strips expect.
    #[default]
    Grb,

    /// Red, green, blue.
    Rgb,
}

impl ColorOrder {
    /// Packs a color into the low 24 bits of a word, first channel highest.
    #[inline]
    pub const fn pack(self, color: Srgb<u8>) -> u32 {
        let (first, second) = match self {
            ColorOrder::Grb => (color.green, color.red),
            ColorOrder::Rgb => (color.red, color.green),
        };
        ((first as u32) << 16) | ((second as u32) << 8) | color.blue as u32
    }
}

/// A digit's 5x5 on/off pattern plus its display color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    rows: [u8; 5],
    color: Srgb<u8>,
}

impl Glyph {
    const fn new(rows: [u8; 5]) -> Self {
        Self {
            rows,
            color: GLYPH_COLOR,
        }
    }

    /// Color used for lit cells.
    #[inline]
    pub const fn color(&self) -> Srgb<u8> {
        self.color
    }

    /// Whether the cell at raster index `cell` is lit.
    ///
    /// Indices outside the matrix are reported as unlit.
    pub const fn is_lit(&self, cell: usize) -> bool {
        if cell >= CELL_COUNT {
            return false;
        }
        let row = self.rows[cell / MATRIX_WIDTH];
        let shift = MATRIX_WIDTH - 1 - cell % MATRIX_WIDTH;
        (row >> shift) & 1 == 1
    }

    /// Cell states in raster order, top-left first.
    pub fn cells(&self) -> impl Iterator<Item = bool> + '_ {
        (0..CELL_COUNT).map(move |cell| self.is_lit(cell))
    }

    /// Packed pixel words in raster order: the glyph color for lit cells,
    /// [`COLOR_OFF`] for the rest.
    pub fn pixels(&self, order: ColorOrder) -> impl Iterator<Item = u32> + '_ {
        let on = order.pack(self.color);
        let off = order.pack(COLOR_OFF);
        self.cells().map(move |lit| if lit { on } else { off })
    }
}

/// Glyphs indexed by digit value.
pub static GLYPHS: [Glyph; 10] = [
    // 0
    Glyph::new([0b11111, 0b10001, 0b10001, 0b10001, 0b11111]),
    // 1
    Glyph::new([0b11111, 0b00100, 0b00101, 0b00110, 0b00100]),
    // 2
    Glyph::new([0b11111, 0b10000, 0b11111, 0b00001, 0b11111]),
    // 3
    Glyph::new([0b11111, 0b00001, 0b01111, 0b00001, 0b11111]),
    // 4
    Glyph::new([0b10000, 0b00001, 0b11111, 0b10001, 0b10001]),
    // 5
    Glyph::new([0b11111, 0b00001, 0b11111, 0b10000, 0b11111]),
    // 6
    Glyph::new([0b11111, 0b10001, 0b11111, 0b10000, 0b11111]),
    // 7
    Glyph::new([0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
    // 8
    Glyph::new([0b11111, 0b10001, 0b11111, 0b10001, 0b11111]),
    // 9
    Glyph::new([0b11111, 0b00001, 0b11111, 0b10001, 0b11111]),
];

/// Looks up the glyph for a digit. Always in bounds.
#[inline]
pub fn for_digit(digit: Digit) -> &'static Glyph {
    &GLYPHS[digit.value() as usize]
}
