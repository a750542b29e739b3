use std::error::Error;
use std::time::{Duration, Instant};

// Use rppal in production
#[cfg(not(test))]
use rppal::gpio::Gpio;

// Mock GPIO for testing
#[cfg(test)]
use crate::mocks::mock_gpio::Gpio;

use crate::cancel::CancelToken;
use crate::config::{LED_DELAY_OFF, LED_DELAY_ON, LED_PIN, LED_TEST_DURATION};

/// Parameters for the LED blink test.
#[derive(Clone, Debug)]
pub struct LedTestConfig {
    pub pin: u8,
    /// Time the LED stays on per cycle.
    pub delay_on: Duration,
    /// Time the LED stays off per cycle.
    pub delay_off: Duration,
    /// Total runtime of the test.
    pub duration: Duration,
}

impl Default for LedTestConfig {
    fn default() -> Self {
        Self {
            pin: LED_PIN,
            delay_on: LED_DELAY_ON,
            delay_off: LED_DELAY_OFF,
            duration: LED_TEST_DURATION,
        }
    }
}

/// Blink an LED until the configured duration has elapsed.
///
/// The duration bound is re-checked between the on and off phases, so the
/// last cycle may be cut short. The pin is driven low on every exit path.
pub fn test_led(config: &LedTestConfig, cancel: &CancelToken) -> Result<(), Box<dyn Error>> {
    let gpio = Gpio::new()?;
    let mut led = gpio.get(config.pin)?.into_output_low();

    println!(
        "Starting LED test on GPIO {} for {:.1}s",
        config.pin,
        config.duration.as_secs_f64()
    );

    let start = Instant::now();
    while start.elapsed() < config.duration {
        led.set_high();
        if !cancel.wait(config.delay_on) {
            break;
        }
        if start.elapsed() >= config.duration {
            break;
        }
        led.set_low();
        if !cancel.wait(config.delay_off) {
            break;
        }
    }

    if cancel.is_cancelled() {
        println!("LED test stopped");
    }

    // LED off no matter how the loop ended.
    led.set_low();
    Ok(())
}
