//! PWM period calibration.
//!
//! Some PWM hardware cannot produce the full 1 s maximum period. Starting
//! from the maximum, the calibrator offers `set(candidate, candidate / 2)`
//! to the channel and halves the candidate on each rejection. The floor is
//! `min_period_ns * 4`, so the brightness sequence still changes frequency
//! at least once with the accepted period.
//!
//! Pure logic, no hardware dependencies. Deterministic: the same sequence
//! of driver responses yields the same result.

use crate::error::BlinkyError;
use crate::output::PwmOutput;

/// Find the largest period the channel accepts.
///
/// Returns the accepted period in nanoseconds, with
/// `min_period_ns * 4 <= period <= max_period_ns`, and leaves the channel
/// programmed at 50% duty with that period. Returns
/// [`BlinkyError::CalibrationFailure`] once the candidate falls below the
/// floor.
pub fn calibrate_period(
    pwm: &mut impl PwmOutput,
    max_period_ns: u32,
    min_period_ns: u32,
) -> Result<u32, BlinkyError> {
    let mut candidate = max_period_ns;

    while pwm.set(candidate, candidate / 2).is_err() {
        candidate /= 2;
        if candidate < min_period_ns * 4 {
            return Err(BlinkyError::CalibrationFailure);
        }
    }

    Ok(candidate)
}
