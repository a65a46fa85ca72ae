//! Controller flags and transition events.

/// The five flags the controller updates once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerState {
    /// This tick's raw read of the switch (`true` = pressed).
    pub switch_raw: bool,

    /// `switch_raw` as it was on the previous tick.
    pub last_switch: bool,

    /// Logical pedal state driving the relays and LEDs.
    pub pedal_on: bool,

    /// Hold counter reached the momentary threshold since the last turn-on.
    pub timeout_reached: bool,

    /// Latching relay pulse in progress.
    pub should_pulse: bool,
}

impl ControllerState {
    /// All flags cleared.
    pub const RESET: ControllerState = ControllerState {
        switch_raw: false,
        last_switch: false,
        pedal_on: false,
        timeout_reached: false,
        should_pulse: false,
    };

    /// True on the tick the switch went from released to pressed.
    #[inline]
    pub fn is_press_edge(&self) -> bool {
        self.switch_raw && !self.last_switch
    }

    /// True on the tick the switch went from pressed to released.
    #[inline]
    pub fn is_release_edge(&self) -> bool {
        !self.switch_raw && self.last_switch
    }
}

/// A change of the pedal state fired by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Press while bypassed turned the pedal on.
    Engaged,

    /// Press while engaged turned the pedal off.
    Bypassed,

    /// Release after a long hold turned the pedal off.
    MomentaryRelease,
}

impl Transition {
    /// Pedal state after this transition.
    #[inline]
    pub fn pedal_on(&self) -> bool {
        matches!(self, Transition::Engaged)
    }
}
