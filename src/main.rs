use std::error::Error;

use actuator_rs::{CancelToken, CycleConfig, run_one_cycle};

fn main() -> Result<(), Box<dyn Error>> {
    println!("Actuator bench test");

    let cancel = CancelToken::new();
    cancel.hook_signals();

    run_one_cycle(&CycleConfig::default(), &cancel)?;

    // Other checks, run by hand as needed:
    // actuator_rs::test_led(&actuator_rs::LedTestConfig::default(), &cancel)?;
    // actuator_rs::test_pwm(&actuator_rs::PwmRampConfig::default(), &cancel)?;
    // actuator_rs::extend_only(&actuator_rs::MoveConfig { speed: 50, ..Default::default() }, &cancel)?;
    // actuator_rs::retract_only(&actuator_rs::MoveConfig { speed: 50, ..Default::default() }, &cancel)?;

    Ok(())
}
