//! The stopwatch control loop.
//!
//! Provides [`Stopwatch`], which owns the hardware and the loop state and runs
//! one pipeline pass per call: sample buttons, detect edges, update the counter,
//! write the display. Two pacing strategies are available:
//!
//! - [`Stopwatch::cycle`] blocks for one second after each tick while running.
//!   Buttons pressed during the delay are only seen once it returns, so input
//!   latency while running is up to one tick.
//! - [`Stopwatch::poll`] never blocks. Ticks are derived from a monotonic clock
//!   through a [`TickSchedule`], so buttons are sampled on every call.

use crate::counter::CounterState;
use crate::display::{DisplayPayload, HEX_MODE, encode};
use crate::hardware::{Delay, StopwatchHardware};
use crate::input::{ButtonSample, EdgeSet, edges};
use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// Blocking delay per tick, in seconds.
pub const TICK_SECONDS: u32 = 1;

/// Tick period used by non-blocking pacing, in milliseconds.
pub const TICK_PERIOD_MILLIS: u64 = TICK_SECONDS as u64 * 1000;

/// What happened during one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Rising edges seen this iteration.
    pub edges: EdgeSet,
    /// Counter state after the iteration.
    pub state: CounterState,
    /// Value written to the display data register.
    pub payload: DisplayPayload,
    /// Number of ticks applied.
    pub ticks: u64,
}

/// Tracks tick deadlines on a monotonic clock.
///
/// Armed on the first call that sees the stopwatch running, disarmed on the
/// first call that sees it stopped. While armed, one tick is due for every
/// full [`TICK_PERIOD_MILLIS`] elapsed since arming. Ticks missed between
/// calls are all reported on the next call.
#[derive(Debug, Clone, Copy)]
pub struct TickSchedule<I: TimeInstant> {
    armed_at: Option<I>,
    ticks_done: u64,
}

impl<I: TimeInstant> TickSchedule<I> {
    /// Creates a disarmed schedule.
    pub const fn new() -> Self {
        Self {
            armed_at: None,
            ticks_done: 0,
        }
    }

    /// Returns true while ticks are being counted.
    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    /// Returns how many ticks became due since the previous call.
    pub fn due(&mut self, running: bool, now: I) -> u64 {
        if !running {
            self.armed_at = None;
            self.ticks_done = 0;
            return 0;
        }

        let Some(armed_at) = self.armed_at else {
            self.armed_at = Some(now);
            return 0;
        };

        let elapsed = now.duration_since(armed_at).as_millis() / TICK_PERIOD_MILLIS;
        let due = elapsed.saturating_sub(self.ticks_done);
        self.ticks_done = self.ticks_done.max(elapsed);
        due
    }
}

impl<I: TimeInstant> Default for TickSchedule<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Stopwatch driving a button register and a 4-digit hex display.
///
/// Holds the only state that survives a loop iteration: the counter and the
/// previous button sample.
pub struct Stopwatch<H: StopwatchHardware> {
    hardware: H,
    state: CounterState,
    previous: ButtonSample,
}

impl<H: StopwatchHardware> Stopwatch<H> {
    /// Creates a stopped stopwatch at zero. Nothing is written to the hardware.
    pub fn new(hardware: H) -> Self {
        Self {
            hardware,
            state: CounterState::INITIAL,
            previous: ButtonSample::RELEASED,
        }
    }

    /// Runs one iteration with blocking pacing.
    ///
    /// Steps the counter with [`CounterState::step`] (edges, then tick) and, if
    /// running, calls `delay` for [`TICK_SECONDS`]. The display is written
    /// every iteration.
    pub fn cycle<D: Delay>(&mut self, delay: &mut D) -> CycleReport {
        let (current, edges) = self.sample();
        self.log_edges(edges);

        self.state = self.state.step(edges);
        let ticks = u64::from(self.state.running);
        if ticks > 0 {
            self.log_tick(ticks);
            delay.delay(TICK_SECONDS);
        }

        let payload = self.show();
        self.previous = current;

        CycleReport {
            edges,
            state: self.state,
            payload,
            ticks,
        }
    }

    /// Runs one iteration with non-blocking pacing.
    ///
    /// Advances the count by however many ticks `schedule` reports as due at
    /// `now`, then applies button edges. Those ticks elapsed before the press,
    /// so a reset leaves zero and a stop keeps them. The display is written
    /// every call.
    pub fn poll<I: TimeInstant>(&mut self, schedule: &mut TickSchedule<I>, now: I) -> CycleReport {
        let (current, edges) = self.sample();

        let ticks = schedule.due(self.state.running, now);
        if ticks > 0 {
            self.state = self.state.advance(ticks);
            self.log_tick(ticks);
        }

        self.log_edges(edges);
        self.state = self.state.apply(edges);
        // Arms or disarms for the new run flag; nothing more is due at `now`.
        schedule.due(self.state.running, now);

        let payload = self.show();
        self.previous = current;

        CycleReport {
            edges,
            state: self.state,
            payload,
            ticks,
        }
    }

    /// Runs the blocking loop forever.
    pub fn run<D: Delay>(mut self, mut delay: D) -> ! {
        #[cfg(feature = "defmt")]
        defmt::info!("stopwatch running with blocking pacing");

        loop {
            self.cycle(&mut delay);
        }
    }

    /// Runs the non-blocking loop forever.
    pub fn run_polling<I: TimeInstant, T: TimeSource<I>>(mut self, clock: &T) -> ! {
        #[cfg(feature = "defmt")]
        defmt::info!("stopwatch running with clock pacing");

        let mut schedule = TickSchedule::new();
        loop {
            self.poll(&mut schedule, clock.now());
        }
    }

    /// Returns the current counter state.
    pub fn state(&self) -> CounterState {
        self.state
    }

    /// Returns the button sample taken by the last iteration.
    pub fn previous_sample(&self) -> ButtonSample {
        self.previous
    }

    /// Returns a reference to the hardware.
    pub fn hardware(&self) -> &H {
        &self.hardware
    }

    /// Returns a mutable reference to the hardware.
    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hardware
    }

    /// Consumes the stopwatch and returns the hardware.
    pub fn into_hardware(self) -> H {
        self.hardware
    }

    fn sample(&mut self) -> (ButtonSample, EdgeSet) {
        let current = ButtonSample::from_raw(self.hardware.read_buttons());
        (current, edges(self.previous, current))
    }

    #[cfg(feature = "defmt")]
    fn log_edges(&self, edges: EdgeSet) {
        for action in crate::command::actions(edges) {
            defmt::debug!("button action: {}", action);
        }
    }

    #[cfg(not(feature = "defmt"))]
    fn log_edges(&self, _edges: EdgeSet) {}

    #[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
    fn log_tick(&self, ticks: u64) {
        #[cfg(feature = "defmt")]
        defmt::trace!("tick x{=u64}, count = {=u16}", ticks, self.state.value);
    }

    fn show(&mut self) -> DisplayPayload {
        let payload = encode(self.state.value);
        self.hardware.write_display_control(HEX_MODE);
        self.hardware.write_display_data(payload.bits());
        payload
    }
}
