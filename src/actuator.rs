use std::error::Error;
use std::time::Duration;

use crate::cancel::CancelToken;
use crate::config::{
    DEAD_BAND_PAUSE, DEFAULT_DRIVE_DURATION, DEFAULT_SPEED_PERCENT, LPWM_PIN, RPWM_PIN,
};
use crate::pwm::{PwmChannel, duty_from_speed};

/// Parameters for a full extend/pause/retract cycle.
#[derive(Clone, Debug)]
pub struct CycleConfig {
    /// Pin for extending (RPWM).
    pub r_pwm_pin: u8,
    /// Pin for retracting (LPWM).
    pub l_pwm_pin: u8,
    /// Speed percentage (0-100).
    pub speed: u8,
    /// Drive time per direction.
    pub duration: Duration,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            r_pwm_pin: RPWM_PIN,
            l_pwm_pin: LPWM_PIN,
            speed: DEFAULT_SPEED_PERCENT,
            duration: DEFAULT_DRIVE_DURATION,
        }
    }
}

/// Parameters for a single-direction move on the default wiring.
#[derive(Clone, Debug)]
pub struct MoveConfig {
    /// Speed percentage (0-100).
    pub speed: u8,
    /// Drive time.
    pub duration: Duration,
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED_PERCENT,
            duration: DEFAULT_DRIVE_DURATION,
        }
    }
}

/// Run exactly one cycle: extend, pause, retract, stop.
///
/// At most one side of the H-bridge carries a nonzero duty cycle at any
/// instant, and the dead-band pause keeps the gearing from taking a reversal
/// at speed. Both channels are forced to 0 and released no matter how the
/// sequence ends.
pub fn run_one_cycle(config: &CycleConfig, cancel: &CancelToken) -> Result<(), Box<dyn Error>> {
    println!(
        "--- Starting single cycle (GPIO {}/{}) ---",
        config.r_pwm_pin, config.l_pwm_pin
    );

    let mut extend = PwmChannel::new(config.r_pwm_pin)?;
    let mut retract = PwmChannel::new(config.l_pwm_pin)?;
    let duty = duty_from_speed(config.speed);

    let outcome = drive_cycle(&mut extend, &mut retract, duty, config.duration, cancel);

    if cancel.is_cancelled() {
        println!("! Cycle interrupted !");
    }

    // Hard stop, whatever happened above.
    println!("--- Cycle complete: motors off ---");
    extend.stop();
    retract.stop();
    outcome
}

fn drive_cycle(
    extend: &mut PwmChannel,
    retract: &mut PwmChannel,
    duty: u16,
    duration: Duration,
    cancel: &CancelToken,
) -> Result<(), Box<dyn Error>> {
    // 1. Extend, with the opposite side forced off first.
    println!("→ Extending for {:.1}s...", duration.as_secs_f64());
    retract.set_duty(0)?;
    extend.set_duty(duty)?;
    if !cancel.wait(duration) {
        return Ok(());
    }

    // 2. Soft stop between directions.
    println!("Pausing...");
    extend.set_duty(0)?;
    if !cancel.wait(DEAD_BAND_PAUSE) {
        return Ok(());
    }

    // 3. Retract.
    println!("← Retracting for {:.1}s...", duration.as_secs_f64());
    retract.set_duty(duty)?;
    if !cancel.wait(duration) {
        return Ok(());
    }

    Ok(())
}

/// Extend the actuator for a fixed time, then stop.
///
/// Only the extend channel is acquired; the retract line is left untouched.
pub fn extend_only(config: &MoveConfig, cancel: &CancelToken) -> Result<(), Box<dyn Error>> {
    println!(
        "→ Extending for {:.1}s at {}%...",
        config.duration.as_secs_f64(),
        config.speed
    );

    let mut extend = PwmChannel::new(RPWM_PIN)?;
    let duty = duty_from_speed(config.speed);

    extend.set_duty(duty)?;
    if !cancel.wait(config.duration) {
        println!("Interrupted!");
    }

    extend.stop();
    println!("→ Stopped.");
    Ok(())
}

/// Retract the actuator for a fixed time, then stop.
///
/// Both channels are acquired so the extend side can be asserted off before
/// the retract side is enabled.
pub fn retract_only(config: &MoveConfig, cancel: &CancelToken) -> Result<(), Box<dyn Error>> {
    println!(
        "← Retracting for {:.1}s at {}%...",
        config.duration.as_secs_f64(),
        config.speed
    );

    let mut extend = PwmChannel::new(RPWM_PIN)?;
    let mut retract = PwmChannel::new(LPWM_PIN)?;
    let duty = duty_from_speed(config.speed);

    // Extend side off before the retract side is enabled.
    extend.set_duty(0)?;
    retract.set_duty(duty)?;
    if !cancel.wait(config.duration) {
        println!("Interrupted!");
    }

    extend.stop();
    retract.stop();
    println!("← Stopped.");
    Ok(())
}
