//! # pwm-blinky
//!
//! PWM brightness cycling and GPIO blink demo for ESP32.
//!
//! ## Architecture
//!
//! All sequencing logic is pure and hardware-free:
//! - [`calibrate`] finds the largest PWM period the hardware accepts
//! - [`brightness`] steps a PWM channel through three duty-cycle levels
//! - [`blink`] toggles a GPIO at a fast-then-slow cadence
//! - [`demo`] composes the two sequencers into the outer control loop
//!
//! Hardware sits behind the [`output`] traits; the ESP-IDF wrappers live in
//! the binary only. Everything in this crate runs on the host under
//! `cargo test`.

#![cfg_attr(not(test), no_std)]

pub mod blink;
pub mod brightness;
pub mod calibrate;
pub mod config;
pub mod demo;
pub mod error;
pub mod output;

pub use blink::BlinkSequencer;
pub use brightness::{BrightnessLevel, BrightnessSequencer, PwmCommand};
pub use calibrate::calibrate_period;
pub use demo::BlinkyDemo;
pub use error::BlinkyError;
pub use output::{BlinkOutput, PwmOutput, Sleeper};
