//! Hardware Abstraction Layer for pwm-blinky.
//!
//! Thin wrappers around ESP-IDF peripherals implementing the crate's output
//! traits. Sequencing logic stays in the core modules, HAL is just I/O.

pub mod delay;
pub mod gpio;
pub mod pwm;

pub use delay::FreeRtosSleeper;
pub use gpio::BlinkLed;
pub use pwm::PwmLed;
