use actuator_rs::config::LED_PIN;
use actuator_rs::{CancelToken, LedTestConfig, PwmRampConfig, test_led, test_pwm};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║     Actuator Hardware Bench Check                    ║");
    println!("╚══════════════════════════════════════════════════════╝\n");

    println!("Instructions:");
    println!("1. Wire the LED (with a series resistor) to GPIO {}", LED_PIN);
    println!("2. The LED blinks first, then sweeps through the PWM range");
    println!("3. Press Ctrl+C at any point to stop\n");

    let cancel = CancelToken::new();
    cancel.hook_signals();

    test_led(&LedTestConfig::default(), &cancel)?;

    if !cancel.is_cancelled() {
        test_pwm(&PwmRampConfig::default(), &cancel)?;
    }

    println!("\n✓ Bench check finished");
    Ok(())
}
