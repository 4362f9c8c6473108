//! Error types for the demo.
//!
//! Every failure here is fatal: the control loop stops, the diagnostic is
//! printed, nothing is retried. A demo showing wrong brightness is worse
//! than a demo that stops.

/// Fatal demo error with code and message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkyError {
    /// E01: Peripheral bring-up failed
    DeviceNotReady,
    /// E02: No supported PWM period down to the floor
    CalibrationFailure,
    /// E03: PWM apply rejected by the driver (raw driver error code)
    ApplyFailure(i32),
    /// E04: GPIO toggle rejected by the driver (raw driver error code)
    ToggleFailure(i32),
}

impl BlinkyError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::DeviceNotReady => "E01",
            Self::CalibrationFailure => "E02",
            Self::ApplyFailure(_) => "E03",
            Self::ToggleFailure(_) => "E04",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::DeviceNotReady => "device not ready",
            Self::CalibrationFailure => "no supported PWM period",
            Self::ApplyFailure(_) => "failed to set pulse width",
            Self::ToggleFailure(_) => "failed to toggle LED",
        }
    }
}

impl core::fmt::Display for BlinkyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ApplyFailure(ret) | Self::ToggleFailure(ret) => {
                write!(f, "{}: {} (err {})", self.code(), self.message(), ret)
            }
            _ => write!(f, "{}: {}", self.code(), self.message()),
        }
    }
}
