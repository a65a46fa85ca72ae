//! Periodic tick callback driving the controller and the shimmer ramp.
//!
//! Provides [`TickHandler`], which owns the tick-context state and publishes the
//! results to a [`SharedContext`] for the render loop. Also defines the
//! [`SwitchInput`] trait for hardware abstraction.

use crate::controller::Controller;
use crate::ramp::BrightnessRamp;
use crate::shared::SharedContext;
use crate::state::{ControllerState, Transition};

/// Trait for abstracting the footswitch input.
///
/// Implement this for your switch hardware. Return `true` while the switch is
/// pressed, after any active-low inversion. No debouncing is expected: the
/// controller only acts on edges between ticks. Handle any hardware errors
/// internally - this method cannot fail.
pub trait SwitchInput {
    /// Returns true if the switch is pressed.
    fn is_pressed(&mut self) -> bool;
}

/// Runs the controller and brightness ramp once per tick.
///
/// Call [`tick`](TickHandler::tick) or [`poll`](TickHandler::poll) from a timer
/// interrupt (or any scheduler callback) at a fixed rate. The handler must run
/// to completion well inside one tick period. If it is delayed past the next
/// tick, that tick is lost: the hold threshold fires late and the latching
/// pulse stretches in wall-clock time. Missed ticks are neither detected nor
/// replayed.
///
/// # Type Parameters
/// * `'c` - Lifetime of the shared context reference
#[derive(Debug)]
pub struct TickHandler<'c> {
    controller: Controller,
    ramp: BrightnessRamp,
    context: &'c SharedContext,
}

impl<'c> TickHandler<'c> {
    /// Creates a handler publishing into `context`.
    pub const fn new(context: &'c SharedContext) -> Self {
        Self {
            controller: Controller::new(),
            ramp: BrightnessRamp::new(),
            context,
        }
    }

    /// Runs one tick with the given switch reading.
    ///
    /// # Returns
    /// * `Some(transition)` - The pedal changed state on this tick
    /// * `None` - No transition fired
    pub fn tick(&mut self, pressed: bool) -> Option<Transition> {
        #[cfg(feature = "defmt")]
        let timed_out = self.controller.state().timeout_reached;
        let transition = self.controller.tick(pressed);

        if transition == Some(Transition::Engaged) {
            self.ramp.restart();
        }
        self.ramp.step();

        #[cfg(feature = "defmt")]
        {
            if let Some(transition) = transition {
                defmt::debug!("footswitch transition: {}", transition);
            }
            if !timed_out && self.controller.state().timeout_reached {
                defmt::trace!("momentary threshold reached");
            }
        }

        let state = self.controller.state();
        self.context.publish(
            state.pedal_on,
            state.switch_raw,
            self.controller.pulse_counter(),
            self.ramp.brightness(),
        );

        transition
    }

    /// Reads the switch and runs one tick.
    pub fn poll<S: SwitchInput>(&mut self, switch: &mut S) -> Option<Transition> {
        let pressed = switch.is_pressed();
        self.tick(pressed)
    }

    /// Returns the controller flags.
    pub fn state(&self) -> ControllerState {
        self.controller.state()
    }

    /// Returns the controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Returns the brightness ramp.
    pub fn ramp(&self) -> &BrightnessRamp {
        &self.ramp
    }
}
