//! LEDC-backed PWM output.
//!
//! One low-speed LEDC timer plus one channel. `set` reprograms the timer
//! frequency from the requested period; the driver rejecting a frequency is
//! exactly how unsupported periods surface to the calibrator.

use esp_idf_svc::sys::{self, esp};

use pwm_blinky::config::NANOS_PER_SEC;
use pwm_blinky::error::BlinkyError;
use pwm_blinky::output::PwmOutput;

const SPEED_MODE: sys::ledc_mode_t = sys::ledc_mode_t_LEDC_LOW_SPEED_MODE;
const TIMER: sys::ledc_timer_t = sys::ledc_timer_t_LEDC_TIMER_0;
const CHANNEL: sys::ledc_channel_t = sys::ledc_channel_t_LEDC_CHANNEL_0;

/// Duty resolution. 10 bits keeps the resolution/frequency product inside
/// the LEDC source clock over the whole range the demo sweeps.
const DUTY_RESOLUTION_BITS: u32 = 10;
const MAX_DUTY: u32 = (1 << DUTY_RESOLUTION_BITS) - 1;

/// PWM LED handle: one configured LEDC timer/channel pair.
pub struct PwmLed {
    gpio_num: i32,
}

impl PwmLed {
    /// Configure the LEDC timer and channel for the given GPIO.
    ///
    /// Any driver rejection during bring-up is [`BlinkyError::DeviceNotReady`].
    pub fn new(gpio_num: i32) -> Result<Self, BlinkyError> {
        let timer_cfg = sys::ledc_timer_config_t {
            speed_mode: SPEED_MODE,
            duty_resolution: sys::ledc_timer_bit_t_LEDC_TIMER_10_BIT,
            timer_num: TIMER,
            freq_hz: 1000,
            clk_cfg: sys::ledc_clk_cfg_t_LEDC_AUTO_CLK,
            ..Default::default()
        };

        esp!(unsafe { sys::ledc_timer_config(&timer_cfg) })
            .map_err(|_| BlinkyError::DeviceNotReady)?;

        let channel_cfg = sys::ledc_channel_config_t {
            gpio_num,
            speed_mode: SPEED_MODE,
            channel: CHANNEL,
            intr_type: sys::ledc_intr_type_t_LEDC_INTR_DISABLE,
            timer_sel: TIMER,
            duty: 0,
            hpoint: 0,
            ..Default::default()
        };

        esp!(unsafe { sys::ledc_channel_config(&channel_cfg) })
            .map_err(|_| BlinkyError::DeviceNotReady)?;

        Ok(Self { gpio_num })
    }

    /// LEDC channel number driving this LED.
    pub fn channel(&self) -> u32 {
        CHANNEL as u32
    }

    /// GPIO this channel is routed to.
    pub fn gpio_num(&self) -> i32 {
        self.gpio_num
    }
}

impl PwmOutput for PwmLed {
    fn set(&mut self, period_ns: u32, pulse_ns: u32) -> Result<(), BlinkyError> {
        if period_ns == 0 {
            return Err(BlinkyError::ApplyFailure(sys::ESP_ERR_INVALID_ARG as i32));
        }

        let freq_hz = NANOS_PER_SEC / period_ns;
        if freq_hz == 0 {
            return Err(BlinkyError::ApplyFailure(sys::ESP_ERR_INVALID_ARG as i32));
        }

        esp!(unsafe { sys::ledc_set_freq(SPEED_MODE, TIMER, freq_hz) })
            .map_err(|e| BlinkyError::ApplyFailure(e.code()))?;

        let duty = (pulse_ns as u64 * MAX_DUTY as u64 / period_ns as u64) as u32;

        esp!(unsafe { sys::ledc_set_duty(SPEED_MODE, CHANNEL, duty) })
            .map_err(|e| BlinkyError::ApplyFailure(e.code()))?;

        esp!(unsafe { sys::ledc_update_duty(SPEED_MODE, CHANNEL) })
            .map_err(|e| BlinkyError::ApplyFailure(e.code()))?;

        Ok(())
    }
}
