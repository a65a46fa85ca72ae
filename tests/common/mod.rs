//! Shared test infrastructure for footswitch-relay integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use footswitch_relay::{
    ControllerState, OutputFrame, RelayOutputs, SwitchInput, TickHandler, Transition,
};

// ============================================================================
// Mock Outputs
// ============================================================================

/// Mock outputs that hold the last written levels and count PWM writes
pub struct MockOutputs {
    pub active_high_relay: bool,
    pub active_low_relay: bool,
    pub latching_pulse: bool,
    pub static_led: bool,
    pub led_duty: u8,
    duty_history: heapless::Vec<u8, 64>,
}

impl MockOutputs {
    pub fn new() -> Self {
        Self {
            active_high_relay: false,
            active_low_relay: false,
            latching_pulse: false,
            static_led: false,
            led_duty: 0,
            duty_history: heapless::Vec::new(),
        }
    }

    /// Current levels as a frame
    pub fn frame(&self) -> OutputFrame {
        OutputFrame {
            active_high_relay: self.active_high_relay,
            active_low_relay: self.active_low_relay,
            latching_pulse: self.latching_pulse,
            static_led: self.static_led,
            led_duty: self.led_duty,
        }
    }

    /// Duty cycles written so far (first 64 only)
    pub fn duty_history(&self) -> &[u8] {
        &self.duty_history
    }
}

impl RelayOutputs for MockOutputs {
    fn set_active_high_relay(&mut self, on: bool) {
        self.active_high_relay = on;
    }

    fn set_active_low_relay(&mut self, on: bool) {
        self.active_low_relay = on;
    }

    fn set_latching_pulse(&mut self, on: bool) {
        self.latching_pulse = on;
    }

    fn set_static_led(&mut self, on: bool) {
        self.static_led = on;
    }

    fn set_led_duty(&mut self, duty: u8) {
        self.led_duty = duty;
        let _ = self.duty_history.push(duty);
    }
}

// ============================================================================
// Mock Switch
// ============================================================================

/// Switch whose level is set directly by the test
pub struct MockSwitch {
    pub pressed: bool,
}

impl SwitchInput for MockSwitch {
    fn is_pressed(&mut self) -> bool {
        self.pressed
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Runs `ticks` ticks with a steady input, collecting any transitions
pub fn run(
    handler: &mut TickHandler<'_>,
    pressed: bool,
    ticks: u32,
) -> heapless::Vec<Transition, 16> {
    let mut transitions = heapless::Vec::new();
    for _ in 0..ticks {
        if let Some(transition) = handler.tick(pressed) {
            let _ = transitions.push(transition);
        }
    }
    transitions
}

/// Presses for `held` ticks, then releases for `gap` ticks
pub fn tap(handler: &mut TickHandler<'_>, held: u32, gap: u32) -> ControllerState {
    run(handler, true, held);
    run(handler, false, gap);
    handler.state()
}
