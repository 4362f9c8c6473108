//! Module: config
//!
//! Purpose: Fixed parameters of the demo. PWM durations are nanoseconds in
//! `u32`, sleep durations are milliseconds.
//!
//! There is no runtime configuration; everything the program does is bounded
//! by these constants.

/// Nanoseconds per second (PWM durations are expressed in nanoseconds).
pub const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Largest candidate PWM period offered to the hardware (1 s).
pub const MAX_PERIOD_NS: u32 = NANOS_PER_SEC;

/// Smallest useful PWM period. The calibrator refuses to go below four times
/// this value so the brightness sequence still changes frequency at least
/// once.
pub const MIN_PERIOD_NS: u32 = NANOS_PER_SEC / 128;

/// Brightness fractions applied to the calibrated period, in display order.
pub const HIGH_BRIGHTNESS: f64 = 0.999;
pub const MED_BRIGHTNESS: f64 = 0.01;
pub const LOW_BRIGHTNESS: f64 = 0.001;

/// Pulse-width divisors paired with the brightness fractions above.
pub const HIGH_DIVISOR: u32 = 1;
pub const MED_DIVISOR: u32 = 10;
pub const LOW_DIVISOR: u32 = 100;

/// How long each brightness level is held before the next one.
pub const DWELL_MS: u32 = 5000;

/// Total length of one blink window.
pub const BLINK_WINDOW_MS: u32 = 10_000;

/// Toggle interval for the first half of the blink window.
pub const FAST_BLINK_MS: u32 = 100;

/// Toggle interval for the second half of the blink window.
pub const SLOW_BLINK_MS: u32 = 1000;

// Board wiring: the chip feature selects the pin assignment.

#[cfg(feature = "esp32s3")]
pub const PWM_LED_GPIO: i32 = 38;
#[cfg(feature = "esp32s3")]
pub const BLINK_LED_GPIO: i32 = 2;

#[cfg(feature = "esp32p4")]
pub const PWM_LED_GPIO: i32 = 22;
#[cfg(feature = "esp32p4")]
pub const BLINK_LED_GPIO: i32 = 23;
