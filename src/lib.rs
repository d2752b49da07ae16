#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! A bare-metal stopwatch for a button register and a 4-digit hex display.
//!
//! # Core Concepts
//!
//! - **`ButtonSample`** / **`EdgeSet`**: Raw button state and the rising edges between two samples
//! - **`StopwatchAction`**: What an edge means (`Toggle` run/stop or `Reset` the count)
//! - **`CounterState`**: Run flag plus 16-bit count, advanced by pure transition functions
//! - **`DisplayPayload`**: Four hex digit cells ready for the display data register
//! - **`StopwatchHardware`**: Trait to implement for your button and display registers
//! - **`Delay`**: Trait to implement for your blocking delay
//! - **`TimeSource`**: Trait to implement for a monotonic clock (non-blocking pacing)
//! - **`Stopwatch`**: Owns the hardware and runs the sample → count → display loop
//!
//! The count wraps from `0xFFFF` to `0x0000`. Buttons are not debounced: one
//! noisy transition is one press.

pub mod command;
pub mod counter;
pub mod display;
pub mod hardware;
pub mod input;
pub mod mmio;
pub mod stopwatch;
pub mod time;

pub use command::{StopwatchAction, actions};
pub use counter::CounterState;
pub use display::{DIGITS, DigitCell, DisplayPayload, HEX_MODE, encode};
pub use hardware::{Delay, HalDelay, StopwatchHardware};
pub use input::{BUTTON_MASK, Button, ButtonSample, EdgeSet, edges};
pub use mmio::{MmioRegisters, RegisterError, RegisterMap};
pub use stopwatch::{CycleReport, Stopwatch, TICK_PERIOD_MILLIS, TICK_SECONDS, TickSchedule};
pub use time::{TimeDuration, TimeInstant, TimeSource};
