//! Button sampling and rising-edge detection.
//!
//! The button register is sampled once per loop iteration. An edge is reported
//! for every bit that is set in the current sample but was clear in the
//! previous one. There is no debouncing: a single bouncing transition counts
//! as a real press.

/// Bits of the button register that carry button state.
pub const BUTTON_MASK: u32 = 0xF;

/// Logical buttons wired to the input register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Bit 0. Starts or stops the count.
    Toggle,
    /// Bit 1. Zeroes the count.
    Reset,
}

impl Button {
    /// Bit position of this button in the input register.
    #[inline]
    pub const fn index(self) -> u32 {
        match self {
            Button::Toggle => 0,
            Button::Reset => 1,
        }
    }

    /// Single-bit mask for this button.
    #[inline]
    pub const fn mask(self) -> u32 {
        1 << self.index()
    }
}

/// Instantaneous state of the buttons, masked to [`BUTTON_MASK`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSample(u32);

impl ButtonSample {
    /// No button pressed.
    pub const RELEASED: Self = ButtonSample(0);

    /// Creates a sample from a raw register value, discarding reserved bits.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        ButtonSample(raw & BUTTON_MASK)
    }

    /// Returns the masked bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if the button is held in this sample.
    #[inline]
    pub const fn is_pressed(self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }
}

/// Buttons that went from released to pressed between two samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeSet(u32);

impl EdgeSet {
    /// No edges.
    pub const NONE: Self = EdgeSet(0);

    /// Creates an edge set from raw bits, discarding reserved bits.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        EdgeSet(raw & BUTTON_MASK)
    }

    /// Returns the edge bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if `button` was pressed since the previous sample.
    #[inline]
    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    /// Returns true if no edge was detected.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Computes rising edges between two consecutive samples.
#[inline]
pub const fn edges(previous: ButtonSample, current: ButtonSample) -> EdgeSet {
    EdgeSet::from_raw(!previous.0 & current.0)
}
