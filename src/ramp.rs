use std::error::Error;
use std::time::{Duration, Instant};

use crate::cancel::CancelToken;
use crate::config::{LED_PIN, PWM_TEST_DURATION, RAMP_HOLD, RAMP_STEP, RAMP_STEP_DELAY};
use crate::pwm::{DUTY_MAX, PwmChannel};

/// Parameters for the PWM ramp test.
#[derive(Clone, Debug)]
pub struct PwmRampConfig {
    pub pin: u8,
    /// Total runtime of the test.
    pub duration: Duration,
}

impl Default for PwmRampConfig {
    fn default() -> Self {
        Self {
            pin: LED_PIN,
            duration: PWM_TEST_DURATION,
        }
    }
}

/// Ramp the duty cycle up to full scale, hold, ramp back down, and repeat
/// until the configured duration has elapsed.
///
/// The duration bound is checked before every step and between phases, so
/// the loop can exit early at any point. The duty cycle is forced to 0 on
/// every exit path.
pub fn test_pwm(config: &PwmRampConfig, cancel: &CancelToken) -> Result<(), Box<dyn Error>> {
    let mut channel = PwmChannel::new(config.pin)?;

    println!(
        "Starting PWM test on GPIO {} for {:.1}s...",
        config.pin,
        config.duration.as_secs_f64()
    );

    let outcome = ramp_loop(&mut channel, config.duration, cancel);

    if cancel.is_cancelled() {
        println!("PWM test stopped");
    }

    channel.stop();
    outcome
}

fn ramp_loop(
    channel: &mut PwmChannel,
    duration: Duration,
    cancel: &CancelToken,
) -> Result<(), Box<dyn Error>> {
    let start = Instant::now();

    while start.elapsed() < duration {
        // 1. Ramp up (slow to fast)
        println!("Speeding up...");
        let mut duty: u16 = 0;
        while duty < DUTY_MAX {
            if start.elapsed() >= duration || cancel.is_cancelled() {
                return Ok(());
            }
            channel.set_duty(duty)?;
            if !cancel.wait(RAMP_STEP_DELAY) {
                return Ok(());
            }
            duty = duty.saturating_add(RAMP_STEP);
        }

        if start.elapsed() >= duration {
            return Ok(());
        }

        // 2. Hold at full speed
        println!("Full speed!");
        channel.set_duty(DUTY_MAX)?;
        if !cancel.wait(RAMP_HOLD) {
            return Ok(());
        }

        if start.elapsed() >= duration {
            return Ok(());
        }

        // 3. Ramp down (fast to slow)
        println!("Slowing down...");
        let mut duty = DUTY_MAX;
        while duty > 0 {
            if start.elapsed() >= duration || cancel.is_cancelled() {
                return Ok(());
            }
            channel.set_duty(duty)?;
            if !cancel.wait(RAMP_STEP_DELAY) {
                return Ok(());
            }
            duty = duty.saturating_sub(RAMP_STEP);
        }

        // 4. Rest at zero before the next pass
        channel.set_duty(0)?;
        if !cancel.wait(RAMP_HOLD) {
            return Ok(());
        }
    }

    Ok(())
}
