//! Output device seams.
//!
//! The sequencers are written against these traits; the binary provides the
//! ESP-IDF implementations, host tests provide recording mocks. Logic stays
//! in the core modules, the implementations are just I/O.

use crate::error::BlinkyError;

/// A PWM channel that can be reprogrammed with a new period and pulse width.
///
/// Durations are nanoseconds. A rejection is reported as
/// [`BlinkyError::ApplyFailure`]; during calibration a rejection merely
/// drives the search, everywhere else it is fatal.
pub trait PwmOutput {
    fn set(&mut self, period_ns: u32, pulse_ns: u32) -> Result<(), BlinkyError>;
}

/// A digital output pin whose logic level can be flipped.
pub trait BlinkOutput {
    fn toggle(&mut self) -> Result<(), BlinkyError>;
}

/// Blocking sleep. Always runs the full requested duration; there is no
/// cancellation.
pub trait Sleeper {
    fn sleep_ms(&mut self, ms: u32);
}
