#![no_std]
#![no_main]

use cortex_m_rt::entry;
use hex_stopwatch::{Delay, MmioRegisters, RegisterMap, Stopwatch};
use panic_halt as _;

#[cfg(feature = "defmt")]
use defmt_rtt as _;

/// Register map to drive.
///
/// `RegisterMap::REFERENCE` is the layout of the FPGA design the stopwatch was
/// written for (seven-segment core and button GPIO in programmable logic). It
/// is a placeholder on the Cortex-M part described by `memory.x`: replace
/// it with the addresses of your display and button peripherals.
const BOARD_REGISTERS: RegisterMap = RegisterMap::REFERENCE;

/// Core clock after reset, used to turn seconds into busy-wait cycles.
const CORE_CLOCK_HZ: u32 = 100_000_000;

// ============================================================================
// Cycle-counting Delay
// ============================================================================

/// Busy-wait delay calibrated against the core clock.
pub struct CycleDelay {
    cycles_per_second: u32,
}

impl CycleDelay {
    pub const fn new(core_clock_hz: u32) -> Self {
        Self {
            cycles_per_second: core_clock_hz,
        }
    }
}

impl Delay for CycleDelay {
    fn delay(&mut self, seconds: u32) {
        for _ in 0..seconds {
            cortex_m::asm::delay(self.cycles_per_second);
        }
    }
}

#[entry]
fn main() -> ! {
    #[cfg(feature = "defmt")]
    defmt::info!("hex stopwatch starting");

    // SAFETY: BOARD_REGISTERS must name the display and button registers of
    // the board this is flashed to, and nothing else here touches them.
    let registers = match unsafe { MmioRegisters::new(BOARD_REGISTERS) } {
        Ok(registers) => registers,
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::error!("bad register map: {}", _e);
            loop {
                cortex_m::asm::bkpt();
            }
        }
    };

    Stopwatch::new(registers).run(CycleDelay::new(CORE_CLOCK_HZ))
}
