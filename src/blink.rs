//! Blink cadence for the plain GPIO LED.
//!
//! One blink window toggles fast for the first half, slow for the second
//! half, then ends. The schedule itself is a pure function of the elapsed
//! accumulator, so the cadence is fully testable without a clock.

use crate::error::BlinkyError;
use crate::output::{BlinkOutput, Sleeper};

/// Fast-then-slow toggle schedule over a fixed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkSequencer {
    window_ms: u32,
    fast_ms: u32,
    slow_ms: u32,
}

impl BlinkSequencer {
    pub const fn new(window_ms: u32, fast_ms: u32, slow_ms: u32) -> Self {
        Self { window_ms, fast_ms, slow_ms }
    }

    /// Interval to sleep after the toggle at `elapsed_ms`, or `None` once
    /// the window is complete.
    #[inline]
    pub fn next_interval(&self, elapsed_ms: u32) -> Option<u32> {
        if elapsed_ms >= self.window_ms {
            None
        } else if elapsed_ms < self.window_ms / 2 {
            Some(self.fast_ms)
        } else {
            Some(self.slow_ms)
        }
    }

    /// Run one complete blink window.
    ///
    /// The elapsed accumulator starts at zero on every call, so a completed
    /// window leaves no state behind and the next run reproduces the same
    /// toggle sequence. A toggle failure is fatal and propagates before any
    /// further sleep.
    pub fn run(
        &self,
        led: &mut impl BlinkOutput,
        sleeper: &mut impl Sleeper,
    ) -> Result<(), BlinkyError> {
        let mut elapsed_ms = 0;

        while let Some(interval_ms) = self.next_interval(elapsed_ms) {
            led.toggle()?;
            sleeper.sleep_ms(interval_ms);
            elapsed_ms += interval_ms;
        }

        Ok(())
    }
}
