//! Volatile memory-mapped register access.

use crate::hardware::StopwatchHardware;

/// Addresses of the three peripheral registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterMap {
    /// Display control register (write-only).
    pub display_control: usize,
    /// Display data register (write-only).
    pub display_data: usize,
    /// Button input register (read-only).
    pub buttons: usize,
}

impl RegisterMap {
    /// Register layout of the reference FPGA design: a seven-segment IP core at
    /// `0x43C1_0000` and a GPIO block for the buttons at `0x4120_0000`, both in
    /// programmable logic. Other boards need their own map.
    pub const REFERENCE: Self = RegisterMap {
        display_control: 0x43C1_0000,
        display_data: 0x43C1_0004,
        buttons: 0x4120_0000,
    };

    fn validate(&self) -> Result<(), RegisterError> {
        for (name, address) in [
            ("display_control", self.display_control),
            ("display_data", self.display_data),
            ("buttons", self.buttons),
        ] {
            if address == 0 {
                return Err(RegisterError::Null { register: name });
            }
            if address % core::mem::align_of::<u32>() != 0 {
                return Err(RegisterError::Misaligned {
                    register: name,
                    address,
                });
            }
        }
        Ok(())
    }
}

/// Errors that can occur when setting up register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterError {
    /// A register address is zero.
    Null {
        /// Name of the offending register.
        register: &'static str,
    },
    /// A register address is not 4-byte aligned.
    Misaligned {
        /// Name of the offending register.
        register: &'static str,
        /// The rejected address.
        address: usize,
    },
}

impl core::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RegisterError::Null { register } => {
                write!(f, "{} register address is null", register)
            }
            RegisterError::Misaligned { register, address } => {
                write!(
                    f,
                    "{} register address {:#010x} is not 4-byte aligned",
                    register, address
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RegisterError {}

/// [`StopwatchHardware`] backed by volatile reads and writes of 32-bit
/// memory-mapped registers.
#[derive(Debug)]
pub struct MmioRegisters {
    display_control: *mut u32,
    display_data: *mut u32,
    buttons: *const u32,
}

impl MmioRegisters {
    /// Creates register access for `map`.
    ///
    /// # Safety
    /// Every address in `map` must point to a valid 32-bit device register
    /// for the lifetime of the returned value, and nothing else may access
    /// those registers concurrently.
    ///
    /// # Returns
    /// * `Err` - An address is null or misaligned
    pub unsafe fn new(map: RegisterMap) -> Result<Self, RegisterError> {
        map.validate()?;
        Ok(Self {
            display_control: map.display_control as *mut u32,
            display_data: map.display_data as *mut u32,
            buttons: map.buttons as *const u32,
        })
    }
}

impl StopwatchHardware for MmioRegisters {
    fn read_buttons(&mut self) -> u32 {
        // SAFETY: address validated in `new`, validity guaranteed by its caller.
        unsafe { core::ptr::read_volatile(self.buttons) }
    }

    fn write_display_control(&mut self, value: u32) {
        // SAFETY: see `read_buttons`.
        unsafe { core::ptr::write_volatile(self.display_control, value) }
    }

    fn write_display_data(&mut self, value: u32) {
        // SAFETY: see `read_buttons`.
        unsafe { core::ptr::write_volatile(self.display_data, value) }
    }
}
