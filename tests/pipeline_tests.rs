//! Property tests for edge detection, the counter state machine and display encoding

mod common;
use common::*;

use hex_stopwatch::{
    BUTTON_MASK, Button, ButtonSample, CounterState, DIGITS, EdgeSet, StopwatchAction, actions,
    encode, edges,
};
use proptest::prelude::*;

// ============================================================================
// Edge detection
// ============================================================================

proptest! {
    #[test]
    fn edges_are_rising_transitions_only(previous in any::<u32>(), current in any::<u32>()) {
        let detected = edges(ButtonSample::from_raw(previous), ButtonSample::from_raw(current));

        prop_assert_eq!(detected.bits(), !previous & current & BUTTON_MASK);
        prop_assert_eq!(detected.bits() & previous, 0);
    }

    #[test]
    fn same_sample_twice_has_no_edges(raw in any::<u32>()) {
        let sample = ButtonSample::from_raw(raw);
        prop_assert!(edges(sample, sample).is_empty());
    }
}

// ============================================================================
// Counter state machine against a reference model
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct Model {
    running: bool,
    value: u32,
}

impl Model {
    fn step(mut self, raw_edges: u32) -> Self {
        if raw_edges & 0b01 != 0 {
            self.running = !self.running;
        }
        if raw_edges & 0b10 != 0 {
            self.value = 0;
        }
        if self.running {
            self.value = (self.value + 1) % 65536;
        }
        self
    }
}

proptest! {
    #[test]
    fn state_machine_matches_model(
        start_value in any::<u16>(),
        start_running in any::<bool>(),
        sequence in proptest::collection::vec(0u32..16, 0..64),
    ) {
        let mut state = CounterState { running: start_running, value: start_value };
        let mut model = Model { running: start_running, value: u32::from(start_value) };

        for raw in sequence {
            state = state.step(EdgeSet::from_raw(raw));
            model = model.step(raw);

            prop_assert_eq!(state.running, model.running);
            prop_assert_eq!(u32::from(state.value), model.value);
        }
    }

    #[test]
    fn double_toggle_is_identity(value in any::<u16>(), running in any::<bool>()) {
        let state = CounterState { running, value };
        let toggle = EdgeSet::from_raw(Button::Toggle.mask());
        prop_assert_eq!(state.apply(toggle).apply(toggle), state);
    }

    #[test]
    fn reset_preserves_run_flag(value in any::<u16>(), running in any::<bool>()) {
        let state = CounterState { running, value }.apply(EdgeSet::from_raw(Button::Reset.mask()));
        prop_assert_eq!(state.value, 0);
        prop_assert_eq!(state.running, running);
    }
}

#[test]
fn simultaneous_edges_decode_toggle_then_reset() {
    let decoded = actions(EdgeSet::from_raw(0b1111));
    assert_eq!(
        decoded.as_slice(),
        &[StopwatchAction::Toggle, StopwatchAction::Reset]
    );
}

#[test]
fn running_tick_from_max_wraps_to_zero() {
    let state = CounterState {
        running: true,
        value: u16::MAX,
    };
    assert_eq!(state.tick().value, 0);
    assert!(state.tick().running);
}

// ============================================================================
// Display encoding
// ============================================================================

#[test]
fn encode_round_trips_every_value() {
    for value in 0..=u16::MAX {
        let payload = encode(value);
        assert_eq!(decode(payload.bits()), value);
        assert_eq!(payload.value(), value);
        assert!(payload.decimal_points_off());
    }
}

#[test]
fn every_cell_has_decimal_point_off_bit() {
    for value in [0u16, 0x0001, 0x7FFF, 0x8000, 0xFFFF] {
        let bits = encode(value).bits();
        assert_eq!(bits & 0x8080_8080, 0x8080_8080);
        assert_eq!(bits & 0x7070_7070, 0);
    }
}

proptest! {
    #[test]
    fn cells_hold_nibbles_least_significant_first(value in any::<u16>()) {
        let payload = encode(value);
        for index in 0..DIGITS {
            let expected = ((value >> (index * 4)) & 0xF) as u8;
            prop_assert_eq!(payload.nibble(index), Some(expected));
            prop_assert_eq!(payload.cells()[index].bits(), 0x80 | expected);
        }
    }

    #[test]
    fn rendered_text_matches_hex_format(value in any::<u16>()) {
        prop_assert_eq!(encode(value).to_string(), format!("{:04X}", value));
    }
}
