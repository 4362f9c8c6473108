//! pwm-blinky - Main entry point
//!
//! Brings up the two LEDs, calibrates the largest PWM period the LEDC
//! hardware accepts, then runs the brightness/blink cycle forever. Every
//! failure past this point is fatal: log it and stop.

use log::{error, info};

use pwm_blinky::{calibrate_period, config, BlinkyDemo, BlinkyError};

mod hal;

use hal::{BlinkLed, FreeRtosSleeper, PwmLed};

fn main() {
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    info!("{}", env!("VERSION_STRING"));
    info!("PWM-based blinky");

    if let Err(err) = run() {
        error!("{}", err);
    }
}

fn run() -> Result<(), BlinkyError> {
    let mut pwm = PwmLed::new(config::PWM_LED_GPIO)?;
    let led = BlinkLed::new(config::BLINK_LED_GPIO)?;
    info!("PWM LED on GPIO {}, blink LED on GPIO {}", pwm.gpio_num(), led.gpio_num());

    info!("Calibrating for channel {}...", pwm.channel());
    let period_ns = calibrate_period(&mut pwm, config::MAX_PERIOD_NS, config::MIN_PERIOD_NS)?;
    info!(
        "Done calibrating; maximum/minimum periods {}/{} nsec",
        period_ns,
        config::MIN_PERIOD_NS
    );

    let mut demo = BlinkyDemo::new(pwm, led, FreeRtosSleeper, period_ns);

    // Never returns under normal operation.
    Err(demo.run())
}
