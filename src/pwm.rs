use std::error::Error;

// Use rppal in production
#[cfg(not(test))]
use rppal::gpio::{Gpio, OutputPin};

// Mock GPIO for testing
#[cfg(test)]
use crate::mocks::mock_gpio::{Gpio, OutputPin};

use crate::config::PWM_FREQUENCY_HZ;

/// Full-scale 16-bit duty cycle value.
pub const DUTY_MAX: u16 = u16::MAX;

/// Convert a 0-100 speed percentage to a 16-bit duty cycle value.
/// Values above 100 count as full speed.
pub fn duty_from_speed(speed_percent: u8) -> u16 {
    let speed = speed_percent.min(100) as f64;
    (speed * DUTY_MAX as f64 / 100.0).round() as u16
}

/// One H-bridge control line, driven as a software PWM output.
///
/// BCM 26/27 have no hardware PWM channel behind them, so the carrier is
/// generated by rppal's software PWM on a plain GPIO output. The pin starts
/// low with duty cycle 0.
pub struct PwmChannel {
    pin: OutputPin,
    pin_number: u8,
    frequency_hz: f64,
}

impl PwmChannel {
    /// Acquire a GPIO pin as a PWM channel at the default carrier frequency.
    pub fn new(pin: u8) -> Result<Self, Box<dyn Error>> {
        Self::with_frequency(pin, PWM_FREQUENCY_HZ)
    }

    pub fn with_frequency(pin_number: u8, frequency_hz: f64) -> Result<Self, Box<dyn Error>> {
        let gpio = Gpio::new()?;
        let mut pin = gpio.get(pin_number)?.into_output_low();
        pin.set_pwm_frequency(frequency_hz, 0.0)?;

        Ok(Self {
            pin,
            pin_number,
            frequency_hz,
        })
    }

    pub fn pin(&self) -> u8 {
        self.pin_number
    }

    /// Set the 16-bit duty cycle value (0 = off, 65535 = fully on).
    pub fn set_duty(&mut self, duty: u16) -> Result<(), Box<dyn Error>> {
        self.pin
            .set_pwm_frequency(self.frequency_hz, duty as f64 / DUTY_MAX as f64)?;
        Ok(())
    }

    /// Force the output inactive. Shutdown path: an error here must not
    /// skip the rest of the cleanup, so it is discarded.
    pub fn stop(&mut self) {
        self.pin.set_pwm_frequency(self.frequency_hz, 0.0).ok();
    }
}

impl Drop for PwmChannel {
    fn drop(&mut self) {
        self.stop();
        self.pin.clear_pwm().ok();
    }
}
