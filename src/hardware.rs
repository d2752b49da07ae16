//! Hardware seams of the control loop.
//!
//! [`StopwatchHardware`] covers the three peripheral registers and [`Delay`]
//! the blocking pacing call. Both are infallible from the loop's point of
//! view: implementations handle any hardware errors internally.

use embedded_hal::delay::DelayNs;

/// Trait for abstracting the button and display registers.
///
/// Implement this for your board (memory-mapped registers, GPIO expander, a
/// simulator) to let the stopwatch drive it.
pub trait StopwatchHardware {
    /// Reads the raw button input register.
    ///
    /// Only the low four bits are used; the rest are ignored.
    fn read_buttons(&mut self) -> u32;

    /// Writes the display control register.
    fn write_display_control(&mut self, value: u32);

    /// Writes the display data register.
    fn write_display_data(&mut self, value: u32);
}

impl<H: StopwatchHardware + ?Sized> StopwatchHardware for &mut H {
    fn read_buttons(&mut self) -> u32 {
        (**self).read_buttons()
    }

    fn write_display_control(&mut self, value: u32) {
        (**self).write_display_control(value)
    }

    fn write_display_data(&mut self, value: u32) {
        (**self).write_display_data(value)
    }
}

/// Blocking whole-second delay used to pace ticks.
pub trait Delay {
    /// Blocks for `seconds` seconds.
    fn delay(&mut self, seconds: u32);
}

impl<D: Delay + ?Sized> Delay for &mut D {
    fn delay(&mut self, seconds: u32) {
        (**self).delay(seconds)
    }
}

/// Adapts any `embedded-hal` delay provider into a [`Delay`].
#[derive(Debug)]
pub struct HalDelay<D> {
    inner: D,
}

impl<D: DelayNs> HalDelay<D> {
    /// Wraps an `embedded-hal` delay.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    /// Returns the wrapped delay.
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: DelayNs> Delay for HalDelay<D> {
    fn delay(&mut self, seconds: u32) {
        // delay_ms takes u32 milliseconds, so go one second at a time.
        for _ in 0..seconds {
            self.inner.delay_ms(1000);
        }
    }
}
