//! Blocking FreeRTOS delay as the demo's sleeper.

use esp_idf_svc::hal::delay::FreeRtos;

use pwm_blinky::output::Sleeper;

/// Sleeper over the FreeRTOS blocking delay. Suspends the whole task for
/// the full requested duration.
pub struct FreeRtosSleeper;

impl Sleeper for FreeRtosSleeper {
    fn sleep_ms(&mut self, ms: u32) {
        FreeRtos::delay_ms(ms);
    }
}
