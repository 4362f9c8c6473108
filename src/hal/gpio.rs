//! GPIO-backed blink output.
//!
//! ESP-IDF has no toggle call, so the handle tracks the logic level and
//! rewrites it inverted. The pin is driven active at configure time, so the
//! first toggle turns the LED off.

use esp_idf_svc::sys::{self, esp};

use pwm_blinky::error::BlinkyError;
use pwm_blinky::output::BlinkOutput;

/// Blink LED handle: an output pin plus its current logic level.
pub struct BlinkLed {
    gpio_num: i32,
    level: bool,
}

impl BlinkLed {
    /// Configure the pin as an output driven active.
    pub fn new(gpio_num: i32) -> Result<Self, BlinkyError> {
        esp!(unsafe { sys::gpio_reset_pin(gpio_num) })
            .map_err(|_| BlinkyError::DeviceNotReady)?;

        esp!(unsafe { sys::gpio_set_direction(gpio_num, sys::gpio_mode_t_GPIO_MODE_OUTPUT) })
            .map_err(|_| BlinkyError::DeviceNotReady)?;

        esp!(unsafe { sys::gpio_set_level(gpio_num, 1) })
            .map_err(|_| BlinkyError::DeviceNotReady)?;

        Ok(Self { gpio_num, level: true })
    }

    /// GPIO this LED is wired to.
    pub fn gpio_num(&self) -> i32 {
        self.gpio_num
    }
}

impl BlinkOutput for BlinkLed {
    fn toggle(&mut self) -> Result<(), BlinkyError> {
        let next = !self.level;

        esp!(unsafe { sys::gpio_set_level(self.gpio_num, next as u32) })
            .map_err(|e| BlinkyError::ToggleFailure(e.code()))?;

        self.level = next;
        Ok(())
    }
}
