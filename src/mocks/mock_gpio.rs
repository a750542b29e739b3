// This file is only compiled during tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Level {
    Low,
    High,
}

#[derive(Debug, Clone, Copy)]
struct PinState {
    level: Level,
    duty: f64,
    released: bool,
}

impl Default for PinState {
    fn default() -> Self {
        Self {
            level: Level::Low,
            duty: 0.0,
            released: false,
        }
    }
}

thread_local! {
    static MOCK_PINS: RefCell<HashMap<u8, PinState>> = RefCell::new(HashMap::new());
    // Ordered write traces, so tests can check interlock ordering.
    static DUTY_TRACE: RefCell<Vec<(u8, u16)>> = const { RefCell::new(Vec::new()) };
    static LEVEL_TRACE: RefCell<Vec<(u8, Level)>> = const { RefCell::new(Vec::new()) };
}

pub struct Gpio;

impl Gpio {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        Ok(Gpio)
    }

    pub fn get(&self, pin: u8) -> Result<Pin, Box<dyn Error>> {
        Ok(Pin { pin })
    }
}

pub struct Pin {
    pin: u8,
}

impl Pin {
    pub fn into_output_low(self) -> OutputPin {
        MOCK_PINS.with(|pins| {
            pins.borrow_mut().insert(self.pin, PinState::default());
        });
        OutputPin { pin: self.pin }
    }
}

pub struct OutputPin {
    pin: u8,
}

impl OutputPin {
    pub fn set_high(&mut self) {
        self.write(Level::High);
    }

    pub fn set_low(&mut self) {
        self.write(Level::Low);
    }

    fn write(&mut self, level: Level) {
        MOCK_PINS.with(|pins| {
            pins.borrow_mut().entry(self.pin).or_default().level = level;
        });
        LEVEL_TRACE.with(|trace| trace.borrow_mut().push((self.pin, level)));
    }

    pub fn set_pwm_frequency(
        &mut self,
        _frequency: f64,
        duty_cycle: f64,
    ) -> Result<(), Box<dyn Error>> {
        MOCK_PINS.with(|pins| {
            pins.borrow_mut().entry(self.pin).or_default().duty = duty_cycle;
        });
        DUTY_TRACE.with(|trace| {
            trace
                .borrow_mut()
                .push((self.pin, (duty_cycle * 65535.0).round() as u16));
        });
        Ok(())
    }

    pub fn clear_pwm(&mut self) -> Result<(), Box<dyn Error>> {
        MOCK_PINS.with(|pins| {
            pins.borrow_mut().entry(self.pin).or_default().released = true;
        });
        Ok(())
    }
}

// test helper to reset all pins and traces
pub fn reset_mock_pins() {
    MOCK_PINS.with(|pins| pins.borrow_mut().clear());
    DUTY_TRACE.with(|trace| trace.borrow_mut().clear());
    LEVEL_TRACE.with(|trace| trace.borrow_mut().clear());
}

// test helper functions to inspect pin state
pub fn level(pin: u8) -> Level {
    MOCK_PINS.with(|pins| pins.borrow().get(&pin).copied().unwrap_or_default().level)
}

pub fn duty_u16(pin: u8) -> u16 {
    MOCK_PINS.with(|pins| {
        let duty = pins.borrow().get(&pin).copied().unwrap_or_default().duty;
        (duty * 65535.0).round() as u16
    })
}

pub fn is_released(pin: u8) -> bool {
    MOCK_PINS.with(|pins| {
        pins.borrow()
            .get(&pin)
            .copied()
            .unwrap_or_default()
            .released
    })
}

pub fn duty_trace() -> Vec<(u8, u16)> {
    DUTY_TRACE.with(|trace| trace.borrow().clone())
}

pub fn level_trace() -> Vec<(u8, Level)> {
    LEVEL_TRACE.with(|trace| trace.borrow().clone())
}
