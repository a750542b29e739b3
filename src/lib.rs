pub mod actuator;
pub mod cancel;
pub mod config;
pub mod led;
pub mod pwm;
pub mod ramp;

// Re-export commonly used types
pub use actuator::{CycleConfig, MoveConfig, extend_only, retract_only, run_one_cycle};
pub use cancel::CancelToken;
pub use led::{LedTestConfig, test_led};
pub use pwm::{PwmChannel, duty_from_speed};
pub use ramp::{PwmRampConfig, test_pwm};

#[cfg(test)]
pub(crate) mod mocks;
