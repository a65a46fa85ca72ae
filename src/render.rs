//! Background-context mapping of published state to the physical outputs.
//!
//! Provides [`Renderer`], which reads a [`StateView`] and drives a
//! [`RelayOutputs`] implementation. The mapping itself lives in
//! [`OutputFrame::from_view`] and has no memory of its own.

use crate::config::{LED_FULL_DUTY, LED_OFF_DUTY};
use crate::shared::StateView;

/// Trait for abstracting the relay and LED outputs.
///
/// Implement this for your hardware (GPIO and a PWM channel) to let the
/// renderer drive it. Handle any hardware errors internally - these methods
/// cannot fail.
pub trait RelayOutputs {
    /// Drives the relay that is energised while the pedal is on.
    fn set_active_high_relay(&mut self, on: bool);

    /// Drives the relay that is energised while the pedal is off.
    fn set_active_low_relay(&mut self, on: bool);

    /// Drives the latching relay coil pulse.
    fn set_latching_pulse(&mut self, on: bool);

    /// Drives the static status LED.
    fn set_static_led(&mut self, on: bool);

    /// Sets the PWM status LED duty cycle (0 = off, 255 = fully on).
    fn set_led_duty(&mut self, duty: u8);
}

/// Output levels for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputFrame {
    /// Active-high relay level.
    pub active_high_relay: bool,

    /// Active-low relay level.
    pub active_low_relay: bool,

    /// Latching relay pulse level.
    pub latching_pulse: bool,

    /// Static LED level.
    pub static_led: bool,

    /// PWM LED duty cycle.
    pub led_duty: u8,
}

impl OutputFrame {
    /// Outputs while bypassed with no pulse running.
    pub const BYPASSED: OutputFrame = OutputFrame {
        active_high_relay: false,
        active_low_relay: true,
        latching_pulse: false,
        static_led: false,
        led_duty: LED_OFF_DUTY,
    };

    /// Computes the outputs for the given state.
    ///
    /// Each field of `view` is read once, individually.
    pub fn from_view<V: StateView + ?Sized>(view: &V) -> Self {
        let latching_pulse = view.pulse_counter() != 0;

        if view.pedal_on() {
            // Shimmer while held to signal momentary mode
            let led_duty = if view.switch_held() {
                view.brightness()
            } else {
                LED_FULL_DUTY
            };

            OutputFrame {
                active_high_relay: true,
                active_low_relay: false,
                latching_pulse,
                static_led: true,
                led_duty,
            }
        } else {
            OutputFrame {
                latching_pulse,
                ..Self::BYPASSED
            }
        }
    }

    /// Writes every level in this frame to `outputs`.
    pub fn apply<O: RelayOutputs>(&self, outputs: &mut O) {
        outputs.set_led_duty(self.led_duty);
        outputs.set_active_high_relay(self.active_high_relay);
        outputs.set_static_led(self.static_led);
        outputs.set_active_low_relay(self.active_low_relay);
        outputs.set_latching_pulse(self.latching_pulse);
    }
}

impl Default for OutputFrame {
    fn default() -> Self {
        Self::BYPASSED
    }
}

/// Drives the outputs from published state.
///
/// Call [`render`](Renderer::render) continuously from the background loop.
/// Every pass rewrites all outputs, so a pass that observed a half-updated
/// tick is corrected by the next one.
///
/// # Type Parameters
/// * `'v` - Lifetime of the state reference
/// * `V` - State source, usually [`SharedContext`](crate::SharedContext)
/// * `O` - Output implementation type
pub struct Renderer<'v, V: StateView + ?Sized, O: RelayOutputs> {
    view: &'v V,
    outputs: O,
}

impl<'v, V: StateView + ?Sized, O: RelayOutputs> Renderer<'v, V, O> {
    /// Creates a renderer and drives the outputs to the bypassed state.
    pub fn new(view: &'v V, mut outputs: O) -> Self {
        OutputFrame::BYPASSED.apply(&mut outputs);
        Self { view, outputs }
    }

    /// Runs one render pass.
    ///
    /// Returns the frame that was written.
    pub fn render(&mut self) -> OutputFrame {
        let frame = OutputFrame::from_view(self.view);
        frame.apply(&mut self.outputs);
        frame
    }

    /// Returns a reference to the outputs.
    pub fn outputs(&self) -> &O {
        &self.outputs
    }
}
