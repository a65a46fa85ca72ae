//! `embedded-hal` 1.0 adapters for the platform traits.
//!
//! [`ActiveLowSwitch`] wraps an input pin wired to ground through the switch
//! with a pull-up, and [`HalOutputs`] wraps four output pins and one PWM
//! channel. Pin errors are discarded, matching the infallible platform traits.

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use embedded_hal::pwm::SetDutyCycle;

use crate::handler::SwitchInput;
use crate::render::RelayOutputs;

/// Footswitch pulling an input low when pressed.
///
/// A failed read counts as released.
pub struct ActiveLowSwitch<P: InputPin> {
    pin: P,
}

impl<P: InputPin> ActiveLowSwitch<P> {
    /// Wraps a pin already configured as an input with pull-up.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Consumes the adapter, returning the pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> SwitchInput for ActiveLowSwitch<P> {
    fn is_pressed(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}

/// Relay and LED outputs on `embedded-hal` pins.
///
/// The 8-bit duty cycle is scaled to the channel's `max_duty_cycle()`.
///
/// # Type Parameters
/// * `AH` - Active-high relay pin
/// * `AL` - Active-low relay pin
/// * `LR` - Latching relay pulse pin
/// * `SL` - Static LED pin
/// * `PWM` - PWM channel of the shimmering LED
pub struct HalOutputs<AH, AL, LR, SL, PWM>
where
    AH: OutputPin,
    AL: OutputPin,
    LR: OutputPin,
    SL: OutputPin,
    PWM: SetDutyCycle,
{
    active_high_relay: AH,
    active_low_relay: AL,
    latching_relay: LR,
    static_led: SL,
    led_pwm: PWM,
}

impl<AH, AL, LR, SL, PWM> HalOutputs<AH, AL, LR, SL, PWM>
where
    AH: OutputPin,
    AL: OutputPin,
    LR: OutputPin,
    SL: OutputPin,
    PWM: SetDutyCycle,
{
    /// Creates the output set from configured pins.
    pub fn new(
        active_high_relay: AH,
        active_low_relay: AL,
        latching_relay: LR,
        static_led: SL,
        led_pwm: PWM,
    ) -> Self {
        Self {
            active_high_relay,
            active_low_relay,
            latching_relay,
            static_led,
            led_pwm,
        }
    }

    /// Consumes the adapter, returning the pins.
    pub fn release(self) -> (AH, AL, LR, SL, PWM) {
        (
            self.active_high_relay,
            self.active_low_relay,
            self.latching_relay,
            self.static_led,
            self.led_pwm,
        )
    }
}

impl<AH, AL, LR, SL, PWM> RelayOutputs for HalOutputs<AH, AL, LR, SL, PWM>
where
    AH: OutputPin,
    AL: OutputPin,
    LR: OutputPin,
    SL: OutputPin,
    PWM: SetDutyCycle,
{
    fn set_active_high_relay(&mut self, on: bool) {
        let _ = self.active_high_relay.set_state(PinState::from(on));
    }

    fn set_active_low_relay(&mut self, on: bool) {
        let _ = self.active_low_relay.set_state(PinState::from(on));
    }

    fn set_latching_pulse(&mut self, on: bool) {
        let _ = self.latching_relay.set_state(PinState::from(on));
    }

    fn set_static_led(&mut self, on: bool) {
        let _ = self.static_led.set_state(PinState::from(on));
    }

    fn set_led_duty(&mut self, duty: u8) {
        let _ = self
            .led_pwm
            .set_duty_cycle_fraction(u16::from(duty), u16::from(u8::MAX));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType as DigitalErrorType;
    use embedded_hal::pwm::ErrorType as PwmErrorType;

    struct MockInput {
        low: bool,
    }

    impl DigitalErrorType for MockInput {
        type Error = Infallible;
    }

    impl InputPin for MockInput {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.low)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(self.low)
        }
    }

    #[derive(Default)]
    struct MockOutput {
        high: bool,
    }

    impl DigitalErrorType for MockOutput {
        type Error = Infallible;
    }

    impl OutputPin for MockOutput {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    struct MockPwm {
        max: u16,
        duty: u16,
    }

    impl PwmErrorType for MockPwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn switch_is_active_low() {
        let mut switch = ActiveLowSwitch::new(MockInput { low: true });
        assert!(switch.is_pressed());

        let mut switch = ActiveLowSwitch::new(MockInput { low: false });
        assert!(!switch.is_pressed());
    }

    #[test]
    fn outputs_drive_pins() {
        let mut outputs = HalOutputs::new(
            MockOutput::default(),
            MockOutput::default(),
            MockOutput::default(),
            MockOutput::default(),
            MockPwm { max: 255, duty: 0 },
        );
        outputs.set_active_high_relay(true);
        outputs.set_active_low_relay(false);
        outputs.set_latching_pulse(true);
        outputs.set_static_led(true);
        outputs.set_led_duty(200);

        let (ah, al, lr, sl, pwm) = outputs.release();
        assert!(ah.high);
        assert!(!al.high);
        assert!(lr.high);
        assert!(sl.high);
        assert_eq!(pwm.duty, 200);
    }

    #[test]
    fn duty_scales_to_channel_range() {
        let mut outputs = HalOutputs::new(
            MockOutput::default(),
            MockOutput::default(),
            MockOutput::default(),
            MockOutput::default(),
            MockPwm { max: 1020, duty: 0 },
        );

        outputs.set_led_duty(255);
        assert_eq!(outputs.release().4.duty, 1020);
    }
}
