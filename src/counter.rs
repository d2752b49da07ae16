//! Run/reset state machine for the 16-bit count.
//!
//! [`CounterState`] is a plain value. Every transition takes the state by value
//! and returns the next one, so the machine can be driven without hardware.
//!
//! | State   | Toggle     | Reset                      | Tick                  |
//! |---------|------------|----------------------------|-----------------------|
//! | stopped | → running  | value := 0, stays stopped  | none                  |
//! | running | → stopped  | value := 0, stays running  | value += 1 (mod 2^16) |

use crate::command::{StopwatchAction, actions};
use crate::input::EdgeSet;

/// Run flag and count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CounterState {
    /// True while the count advances.
    pub running: bool,
    /// Current count. Wraps from 65535 to 0.
    pub value: u16,
}

impl CounterState {
    /// Stopped at zero.
    pub const INITIAL: Self = CounterState {
        running: false,
        value: 0,
    };

    /// Applies a single action.
    #[inline]
    pub const fn handle(self, action: StopwatchAction) -> Self {
        match action {
            StopwatchAction::Toggle => CounterState {
                running: !self.running,
                value: self.value,
            },
            StopwatchAction::Reset => CounterState {
                running: self.running,
                value: 0,
            },
        }
    }

    /// Applies every action encoded in `edges`, toggle first.
    pub fn apply(self, edges: EdgeSet) -> Self {
        actions(edges)
            .into_iter()
            .fold(self, |state, action| state.handle(action))
    }

    /// Advances the count by one if running.
    #[inline]
    pub const fn tick(self) -> Self {
        if self.running {
            CounterState {
                running: true,
                value: self.value.wrapping_add(1),
            }
        } else {
            self
        }
    }

    /// Advances the count by `ticks` if running, wrapping modulo 2^16.
    #[inline]
    pub const fn advance(self, ticks: u64) -> Self {
        if self.running {
            CounterState {
                running: true,
                // Only the low 16 bits of `ticks` affect a modulo 2^16 count.
                value: self.value.wrapping_add(ticks as u16),
            }
        } else {
            self
        }
    }

    /// One full loop iteration: apply edges, then tick.
    #[inline]
    pub fn step(self, edges: EdgeSet) -> Self {
        self.apply(edges).tick()
    }
}
