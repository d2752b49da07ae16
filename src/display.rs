//! Encoding of the count for the 4-digit hexadecimal display.
//!
//! The display data register takes four 8-bit digit cells, cell 0 (the least
//! significant digit) in bits `[0:8)` and cell 3 in bits `[24:32)`. Each cell
//! carries a hex nibble in its low four bits. Bit 7 switches the digit's
//! decimal point off and is always set.

/// Value written to the display control register to select hex digit mode.
pub const HEX_MODE: u32 = 1;

/// Number of digits on the display.
pub const DIGITS: usize = 4;

/// Cell bit that turns the decimal point off.
pub const DECIMAL_POINT_OFF: u8 = 0x80;

const NIBBLE_MASK: u8 = 0x0F;

/// One display digit as the hardware sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitCell(u8);

impl DigitCell {
    /// Creates a cell showing `nibble` with the decimal point off.
    ///
    /// Only the low four bits of `nibble` are used.
    #[inline]
    pub const fn new(nibble: u8) -> Self {
        DigitCell(DECIMAL_POINT_OFF | (nibble & NIBBLE_MASK))
    }

    /// Hex digit shown by this cell.
    #[inline]
    pub const fn nibble(self) -> u8 {
        self.0 & NIBBLE_MASK
    }

    /// Returns true if the decimal point is off.
    #[inline]
    pub const fn decimal_point_off(self) -> bool {
        self.0 & DECIMAL_POINT_OFF != 0
    }

    /// Raw cell byte.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Character rendered for this cell, as an uppercase hex digit.
    pub const fn glyph(self) -> char {
        let nibble = self.nibble();
        if nibble < 10 {
            (b'0' + nibble) as char
        } else {
            (b'A' + nibble - 10) as char
        }
    }
}

/// Ready-to-write display data register value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayPayload(u32);

impl DisplayPayload {
    /// Raw register value.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Cell at `index`, where 0 is the least significant digit.
    ///
    /// Returns `None` for indices outside the display.
    pub const fn cell(self, index: usize) -> Option<DigitCell> {
        if index >= DIGITS {
            return None;
        }
        Some(DigitCell((self.0 >> (index * 8)) as u8))
    }

    /// Nibble shown at `index`, where 0 is the least significant digit.
    pub fn nibble(self, index: usize) -> Option<u8> {
        self.cell(index).map(DigitCell::nibble)
    }

    /// All four cells, least significant first.
    pub fn cells(self) -> [DigitCell; DIGITS] {
        self.0.to_le_bytes().map(DigitCell)
    }

    /// Count shown on the display, reassembled from the four nibbles.
    pub fn value(self) -> u16 {
        self.cells()
            .iter()
            .rev()
            .fold(0, |acc, cell| (acc << 4) | u16::from(cell.nibble()))
    }

    /// Returns true if no decimal point is lit.
    pub fn decimal_points_off(self) -> bool {
        self.cells().iter().all(|cell| cell.decimal_point_off())
    }

    /// Digits as they read left to right on the display.
    pub fn glyphs(self) -> [char; DIGITS] {
        let cells = self.cells();
        core::array::from_fn(|i| cells[DIGITS - 1 - i].glyph())
    }
}

impl From<u16> for DisplayPayload {
    fn from(value: u16) -> Self {
        encode(value)
    }
}

impl core::fmt::Display for DisplayPayload {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for glyph in self.glyphs() {
            write!(f, "{}", glyph)?;
        }
        Ok(())
    }
}

/// Encodes a count for the display data register.
pub const fn encode(value: u16) -> DisplayPayload {
    let mut bits = 0u32;
    let mut index = 0;
    while index < DIGITS {
        let nibble = (value >> (index * 4)) as u8;
        bits |= (DigitCell::new(nibble).bits() as u32) << (index * 8);
        index += 1;
    }
    DisplayPayload(bits)
}
