//! Triangle-wave brightness generator for the shimmer effect.

use crate::config::{BRIGHTNESS_MAX, BRIGHTNESS_MIN};

/// Direction of the brightness ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RampDirection {
    /// Climbing toward [`BRIGHTNESS_MAX`].
    Rising,
    /// Falling toward [`BRIGHTNESS_MIN`].
    Falling,
}

/// 8-bit triangle wave advanced by one step per tick.
///
/// Bounces between [`BRIGHTNESS_MIN`] and [`BRIGHTNESS_MAX`]. A turning point
/// costs one tick: the value holds at the bound while the direction flips.
/// After [`restart`](BrightnessRamp::restart) the value climbs from 0, so it
/// only settles inside the bounds once it has passed [`BRIGHTNESS_MIN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BrightnessRamp {
    brightness: u8,
    direction: RampDirection,
}

impl BrightnessRamp {
    /// Creates a ramp at the lower bound, rising.
    pub const fn new() -> Self {
        Self {
            brightness: BRIGHTNESS_MIN,
            direction: RampDirection::Rising,
        }
    }

    /// Advances the ramp by one tick.
    pub fn step(&mut self) {
        match self.direction {
            RampDirection::Rising => {
                if self.brightness < BRIGHTNESS_MAX {
                    self.brightness += 1;
                } else {
                    self.direction = RampDirection::Falling;
                }
            }
            RampDirection::Falling => {
                if self.brightness > BRIGHTNESS_MIN {
                    self.brightness -= 1;
                } else {
                    self.direction = RampDirection::Rising;
                }
            }
        }
    }

    /// Drops the brightness to 0 so the shimmer fades in from dark.
    ///
    /// The direction is left alone; a falling ramp below the lower bound
    /// turns around on its next step.
    pub fn restart(&mut self) {
        self.brightness = 0;
    }

    /// Current brightness.
    #[inline]
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Current direction.
    #[inline]
    pub fn direction(&self) -> RampDirection {
        self.direction
    }

    /// Returns true while the ramp is climbing.
    #[inline]
    pub fn is_rising(&self) -> bool {
        self.direction == RampDirection::Rising
    }
}

impl Default for BrightnessRamp {
    fn default() -> Self {
        Self::new()
    }
}
