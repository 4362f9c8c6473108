//! Brightness sequencing over a calibrated PWM period.
//!
//! Each level scales the calibrated period by a brightness fraction and
//! divides the pulse width further, so stepping down a level both dims the
//! LED and raises the PWM frequency.
//!
//! Numeric contract: `scaled = period * fraction` is computed in `f64` and
//! truncated to whole nanoseconds only at the `u32` boundary, with the
//! multiplication performed before the divisor is applied. Reordering the
//! arithmetic changes the truncation and breaks the test oracle.

use crate::config;
use crate::error::BlinkyError;
use crate::output::{PwmOutput, Sleeper};

/// One brightness level: a fraction of the calibrated period plus the
/// divisor applied to the pulse width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessLevel {
    pub fraction: f64,
    pub divisor: u32,
}

/// A period/pulse pair ready to hand to the PWM driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmCommand {
    pub period_ns: u32,
    pub pulse_ns: u32,
}

impl BrightnessLevel {
    /// Compute the driver command for this level at the given base period.
    pub fn command(&self, period_ns: u32) -> PwmCommand {
        let scaled = period_ns as f64 * self.fraction;

        PwmCommand {
            period_ns: scaled as u32,
            pulse_ns: (scaled / self.divisor as f64) as u32,
        }
    }
}

/// The three levels of the demo, brightest first.
pub const LEVELS: [BrightnessLevel; 3] = [
    BrightnessLevel { fraction: config::HIGH_BRIGHTNESS, divisor: config::HIGH_DIVISOR },
    BrightnessLevel { fraction: config::MED_BRIGHTNESS, divisor: config::MED_DIVISOR },
    BrightnessLevel { fraction: config::LOW_BRIGHTNESS, divisor: config::LOW_DIVISOR },
];

/// Steps a PWM channel through the brightness levels, holding each for a
/// fixed dwell time.
#[derive(Debug, Clone, Copy)]
pub struct BrightnessSequencer {
    period_ns: u32,
    dwell_ms: u32,
}

impl BrightnessSequencer {
    /// Create a sequencer over a calibrated base period.
    pub const fn new(period_ns: u32, dwell_ms: u32) -> Self {
        Self { period_ns, dwell_ms }
    }

    /// Calibrated base period this sequencer scales.
    #[inline]
    pub fn period_ns(&self) -> u32 {
        self.period_ns
    }

    /// Run one full pass: apply each level, then hold it for the dwell time.
    ///
    /// An apply failure is fatal and propagates immediately; the remaining
    /// levels are not attempted and the failed level is not held.
    pub fn run(
        &self,
        pwm: &mut impl PwmOutput,
        sleeper: &mut impl Sleeper,
    ) -> Result<(), BlinkyError> {
        for level in &LEVELS {
            let cmd = level.command(self.period_ns);
            pwm.set(cmd.period_ns, cmd.pulse_ns)?;
            sleeper.sleep_ms(self.dwell_ms);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_level_command() {
        let level = BrightnessLevel { fraction: 0.999, divisor: 1 };
        let cmd = level.command(1000);

        assert_eq!(cmd, PwmCommand { period_ns: 999, pulse_ns: 999 });
    }

    #[test]
    fn test_med_level_command() {
        // pulse = P * 0.01 / 10
        let level = BrightnessLevel { fraction: 0.01, divisor: 10 };
        let cmd = level.command(1_000_000_000);

        assert_eq!(cmd.period_ns, 10_000_000);
        assert_eq!(cmd.pulse_ns, 1_000_000);
    }

    #[test]
    fn test_truncation_multiplies_before_dividing() {
        // 999 * 0.001 = 0.999 -> period truncates to 0, while the pulse is
        // 0.999 / 100 truncated, not trunc(0.999) / 100 re-derived.
        let level = BrightnessLevel { fraction: 0.001, divisor: 100 };
        let cmd = level.command(999);

        assert_eq!(cmd.period_ns, 0);
        assert_eq!(cmd.pulse_ns, 0);
    }

    #[test]
    fn test_levels_order_brightest_first() {
        assert_eq!(LEVELS[0].fraction, 0.999);
        assert_eq!(LEVELS[1].fraction, 0.01);
        assert_eq!(LEVELS[2].fraction, 0.001);
        assert_eq!(LEVELS[2].divisor, 100);
    }
}
