//! Button edges decoded into stopwatch actions.

use crate::input::{Button, EdgeSet};
use heapless::Vec;

/// Maximum number of actions one edge set can produce.
pub const MAX_ACTIONS: usize = 2;

/// Actions the counter state machine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopwatchAction {
    /// Flip between running and stopped.
    Toggle,
    /// Zero the count without changing the run flag.
    Reset,
}

impl StopwatchAction {
    /// All actions, in the order they are applied.
    pub const ALL: [StopwatchAction; MAX_ACTIONS] = [StopwatchAction::Toggle, StopwatchAction::Reset];

    /// Button that triggers this action.
    pub const fn button(self) -> Button {
        match self {
            StopwatchAction::Toggle => Button::Toggle,
            StopwatchAction::Reset => Button::Reset,
        }
    }
}

/// Decodes an edge set into the actions to apply, in application order.
///
/// Toggle always comes before reset. Reserved bits are ignored.
pub fn actions(edges: EdgeSet) -> Vec<StopwatchAction, MAX_ACTIONS> {
    let mut actions = Vec::new();
    for action in StopwatchAction::ALL {
        if edges.contains(action.button()) {
            // Capacity matches the number of actions checked.
            let _ = actions.push(action);
        }
    }
    actions
}
