//! Tick-driven footswitch state machine.
//!
//! Provides [`Controller`], which fuses edge detection, hold timing and latching
//! pulse generation into a single update per tick. The switch is sampled without
//! a debounce filter: transitions are gated on edges between consecutive ticks,
//! so contact bounce within one tick period is never seen and a steady hold
//! never retriggers.

use crate::config::{LATCHING_TIME, MOMENTARY_DELAY};
use crate::state::{ControllerState, Transition};

/// Footswitch state machine.
///
/// Call [`tick`](Controller::tick) exactly once per tick period with the raw
/// switch reading. The update order within a tick is fixed:
///
/// 1. hold-timeout accounting
/// 2. edge history capture
/// 3. input sampling and transition logic
/// 4. latching pulse progression
///
/// Later steps read values written by earlier ones in the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Controller {
    state: ControllerState,
    hold_counter: u16,
    pulse_counter: u8,
}

impl Controller {
    /// Creates a controller with the pedal bypassed and all counters at zero.
    pub const fn new() -> Self {
        Self {
            state: ControllerState::RESET,
            hold_counter: 0,
            pulse_counter: 0,
        }
    }

    /// Advances the state machine by one tick.
    ///
    /// # Returns
    /// * `Some(transition)` - The pedal changed state on this tick
    /// * `None` - No transition fired
    pub fn tick(&mut self, pressed: bool) -> Option<Transition> {
        self.account_hold();
        self.state.last_switch = self.state.switch_raw;
        let transition = self.sample(pressed);
        self.progress_pulse();

        transition
    }

    fn account_hold(&mut self) {
        self.hold_counter += 1;
        if self.hold_counter == MOMENTARY_DELAY {
            self.state.timeout_reached = true;
            self.hold_counter = 0;
        }
    }

    fn sample(&mut self, pressed: bool) -> Option<Transition> {
        self.state.switch_raw = pressed;

        if self.state.is_press_edge() {
            // A pulse already running is not restarted
            self.state.should_pulse = true;
            if self.state.pedal_on {
                self.state.pedal_on = false;
                Some(Transition::Bypassed)
            } else {
                self.state.pedal_on = true;
                self.state.timeout_reached = false;
                self.hold_counter = 0;
                Some(Transition::Engaged)
            }
        } else if self.state.is_release_edge() && self.state.pedal_on && self.state.timeout_reached {
            self.state.pedal_on = false;
            self.state.should_pulse = true;
            Some(Transition::MomentaryRelease)
        } else {
            None
        }
    }

    fn progress_pulse(&mut self) {
        if self.state.should_pulse && self.pulse_counter < LATCHING_TIME {
            self.pulse_counter += 1;
        } else {
            self.state.should_pulse = false;
            self.pulse_counter = 0;
        }
    }

    /// Returns the current flags.
    #[inline]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Returns true if the pedal is engaged.
    #[inline]
    pub fn is_on(&self) -> bool {
        self.state.pedal_on
    }

    /// Ticks counted toward the momentary threshold.
    #[inline]
    pub fn hold_counter(&self) -> u16 {
        self.hold_counter
    }

    /// Ticks elapsed in the current latching pulse, 0 when idle.
    #[inline]
    pub fn pulse_counter(&self) -> u8 {
        self.pulse_counter
    }

    /// Returns true while the latching relay output should be asserted.
    #[inline]
    pub fn is_pulsing(&self) -> bool {
        self.pulse_counter != 0
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(controller: &mut Controller, pressed: bool, ticks: u32) {
        for _ in 0..ticks {
            controller.tick(pressed);
        }
    }

    #[test]
    fn starts_bypassed() {
        let controller = Controller::new();
        assert_eq!(controller.state(), ControllerState::RESET);
        assert_eq!(controller.hold_counter(), 0);
        assert!(!controller.is_pulsing());
    }

    #[test]
    fn press_edge_engages() {
        let mut controller = Controller::new();
        assert_eq!(controller.tick(true), Some(Transition::Engaged));

        let state = controller.state();
        assert!(state.pedal_on);
        assert!(state.should_pulse);
        assert!(!state.timeout_reached);
        assert_eq!(controller.hold_counter(), 0);
        assert_eq!(controller.pulse_counter(), 1);
    }

    #[test]
    fn steady_hold_fires_once() {
        let mut controller = Controller::new();
        assert_eq!(controller.tick(true), Some(Transition::Engaged));
        for _ in 0..50 {
            assert_eq!(controller.tick(true), None);
        }
        assert!(controller.is_on());
    }

    #[test]
    fn second_tap_bypasses() {
        let mut controller = Controller::new();
        controller.tick(true);
        run(&mut controller, false, 20);
        assert_eq!(controller.tick(true), Some(Transition::Bypassed));
        assert!(!controller.is_on());
        assert!(controller.state().should_pulse);
    }

    #[test]
    fn hold_counter_wraps_at_threshold() {
        let mut controller = Controller::new();
        run(&mut controller, false, u32::from(MOMENTARY_DELAY) - 1);
        assert!(!controller.state().timeout_reached);
        assert_eq!(controller.hold_counter(), MOMENTARY_DELAY - 1);

        controller.tick(false);
        assert!(controller.state().timeout_reached);
        assert_eq!(controller.hold_counter(), 0);
    }

    #[test]
    fn pulse_lasts_latching_time() {
        let mut controller = Controller::new();
        controller.tick(true);
        let mut asserted = 1;
        while controller.is_pulsing() {
            controller.tick(true);
            if controller.is_pulsing() {
                asserted += 1;
            }
        }
        assert_eq!(asserted, LATCHING_TIME);
        assert!(!controller.state().should_pulse);
    }

    #[test]
    fn retrigger_keeps_running_pulse() {
        let mut controller = Controller::new();
        controller.tick(true);
        controller.tick(false);
        assert_eq!(controller.pulse_counter(), 2);

        assert_eq!(controller.tick(true), Some(Transition::Bypassed));
        assert_eq!(controller.pulse_counter(), 3);
        assert!(controller.state().should_pulse);

        controller.tick(true);
        assert_eq!(controller.pulse_counter(), 0);
        assert!(!controller.state().should_pulse);
    }

    #[test]
    fn transition_on_last_pulse_tick_is_absorbed() {
        let mut controller = Controller::new();
        controller.tick(true);
        controller.tick(false);
        controller.tick(false);
        assert_eq!(controller.pulse_counter(), 3);

        assert_eq!(controller.tick(true), Some(Transition::Bypassed));
        assert_eq!(controller.pulse_counter(), 0);
        assert!(!controller.state().should_pulse);
    }

    #[test]
    fn release_without_timeout_keeps_pedal_on() {
        let mut controller = Controller::new();
        controller.tick(true);
        run(&mut controller, true, 10);
        assert_eq!(controller.tick(false), None);
        assert!(controller.is_on());
    }
}
