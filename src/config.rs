use std::time::Duration;

// ** H-BRIDGE WIRING ** //

/// GPIO pin assignments for the H-bridge control lines (BCM numbering).
/// RPWM drives the actuator out, LPWM pulls it back in.
pub const RPWM_PIN: u8 = 26;
pub const LPWM_PIN: u8 = 27;
/// Bench/status LED.
pub const LED_PIN: u8 = 2;
/// PWM carrier frequency for every channel.
/// 1 kHz is the usual choice for brushed DC motor drivers.
pub const PWM_FREQUENCY_HZ: f64 = 1000.0;

// ** MOTION TIMING ** //

/// Zero-output interval inserted when reversing direction.
/// Protects the gearing from shock loading.
pub const DEAD_BAND_PAUSE: Duration = Duration::from_millis(500);
/// Default drive time per direction.
pub const DEFAULT_DRIVE_DURATION: Duration = Duration::from_secs(2);
/// Default speed percentage (0-100).
pub const DEFAULT_SPEED_PERCENT: u8 = 100;

// ** PWM RAMP TEST ** //

/// Duty cycle change per ramp step.
pub const RAMP_STEP: u16 = 1000;
/// Delay between ramp steps.
pub const RAMP_STEP_DELAY: Duration = Duration::from_millis(50);
/// Hold time at full duty (and at rest) between ramps.
pub const RAMP_HOLD: Duration = Duration::from_secs(1);
/// Default total runtime of the PWM ramp test.
pub const PWM_TEST_DURATION: Duration = Duration::from_secs(10);

// ** LED TEST ** //

pub const LED_DELAY_ON: Duration = Duration::from_secs(2);
pub const LED_DELAY_OFF: Duration = Duration::from_secs(1);
pub const LED_TEST_DURATION: Duration = Duration::from_secs(10);

// ** CANCELLATION ** //

/// How often blocking waits poll the cancel flag.
pub const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(50);
