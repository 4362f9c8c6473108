//! Outer control loop.
//!
//! One cycle is a full brightness pass followed by a complete blink window;
//! the loop repeats forever. The only way out is one of the fatal errors,
//! which stops the loop and is reported by the caller.

use crate::blink::BlinkSequencer;
use crate::brightness::BrightnessSequencer;
use crate::config;
use crate::error::BlinkyError;
use crate::output::{BlinkOutput, PwmOutput, Sleeper};

/// The demo: two output handles, a sleeper, and the sequencers built from
/// the calibrated period.
///
/// The handles are owned for the life of the process; the calibrated period
/// is written once at construction and only read afterwards.
pub struct BlinkyDemo<P, L, S> {
    pwm: P,
    led: L,
    sleeper: S,
    brightness: BrightnessSequencer,
    blink: BlinkSequencer,
}

impl<P, L, S> BlinkyDemo<P, L, S>
where
    P: PwmOutput,
    L: BlinkOutput,
    S: Sleeper,
{
    /// Build the demo around a calibrated period, using the fixed timing
    /// constants from [`config`].
    pub fn new(pwm: P, led: L, sleeper: S, period_ns: u32) -> Self {
        Self {
            pwm,
            led,
            sleeper,
            brightness: BrightnessSequencer::new(period_ns, config::DWELL_MS),
            blink: BlinkSequencer::new(
                config::BLINK_WINDOW_MS,
                config::FAST_BLINK_MS,
                config::SLOW_BLINK_MS,
            ),
        }
    }

    /// Run one cycle: three brightness phases, then one blink window.
    pub fn run_cycle(&mut self) -> Result<(), BlinkyError> {
        self.brightness.run(&mut self.pwm, &mut self.sleeper)?;
        self.blink.run(&mut self.led, &mut self.sleeper)
    }

    /// Run cycles forever. Returns only the fatal error that stopped the
    /// loop.
    pub fn run(&mut self) -> BlinkyError {
        loop {
            if let Err(err) = self.run_cycle() {
                return err;
            }
        }
    }
}
