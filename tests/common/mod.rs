//! Shared test infrastructure for hex-stopwatch integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use hex_stopwatch::{Delay, StopwatchHardware, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }
}

// ============================================================================
// Mock Hardware
// ============================================================================

/// A single register access, in the order the stopwatch made it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    ReadButtons(u32),
    WriteControl(u32),
    WriteData(u32),
}

/// Mock registers: buttons are set by the test, writes are recorded
pub struct MockHardware {
    buttons: u32,
    accesses: heapless::Vec<RegisterAccess, 64>,
    last_data: Option<u32>,
}

impl MockHardware {
    pub fn new() -> Self {
        Self {
            buttons: 0,
            accesses: heapless::Vec::new(),
            last_data: None,
        }
    }

    /// Sets the raw value returned by subsequent button reads
    pub fn set_buttons(&mut self, raw: u32) {
        self.buttons = raw;
    }

    pub fn accesses(&self) -> &[RegisterAccess] {
        &self.accesses
    }

    pub fn clear_accesses(&mut self) {
        self.accesses.clear();
    }

    pub fn last_data(&self) -> Option<u32> {
        self.last_data
    }

    fn record(&mut self, access: RegisterAccess) {
        // Long-running tests only care about the latest values.
        if self.accesses.is_full() {
            self.accesses.clear();
        }
        let _ = self.accesses.push(access);
    }
}

impl StopwatchHardware for MockHardware {
    fn read_buttons(&mut self) -> u32 {
        let raw = self.buttons;
        self.record(RegisterAccess::ReadButtons(raw));
        raw
    }

    fn write_display_control(&mut self, value: u32) {
        self.record(RegisterAccess::WriteControl(value));
    }

    fn write_display_data(&mut self, value: u32) {
        self.last_data = Some(value);
        self.record(RegisterAccess::WriteData(value));
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Mock delay that records every call instead of blocking
pub struct MockDelay {
    calls: heapless::Vec<u32, 64>,
    total_seconds: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self {
            calls: heapless::Vec::new(),
            total_seconds: 0,
        }
    }

    pub fn calls(&self) -> &[u32] {
        &self.calls
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }
}

impl Delay for MockDelay {
    fn delay(&mut self, seconds: u32) {
        self.total_seconds += u64::from(seconds);
        let _ = self.calls.push(seconds);
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Raw button register value with the toggle button held
pub const TOGGLE: u32 = 0b01;

/// Raw button register value with the reset button held
pub const RESET: u32 = 0b10;

/// Raw button register value with nothing held
pub const RELEASED: u32 = 0;

/// Reassembles a count from a display payload's nibbles
pub fn decode(payload: u32) -> u16 {
    let n = |i: u32| ((payload >> (i * 8)) & 0xF) as u16;
    (n(3) << 12) | (n(2) << 8) | (n(1) << 4) | n(0)
}
