//! Tick rate helpers for platform-agnostic timing.
//!
//! The controller only counts ticks. [`TickRate`] converts those counts to and
//! from milliseconds and derives the compare-match value a clear-on-match timer
//! needs to produce the tick.

use crate::config::{LATCHING_TIME, MOMENTARY_DELAY, TICK_HZ};

/// Errors from tick rate calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// Tick frequency of zero.
    ZeroRate,

    /// Timer prescaler of zero.
    ZeroPrescaler,

    /// Compare value does not fit the 8-bit compare register.
    CompareOutOfRange {
        /// The computed counts per tick
        value: u32,
    },
}

impl core::fmt::Display for TimingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimingError::ZeroRate => write!(f, "tick rate must be non-zero"),
            TimingError::ZeroPrescaler => write!(f, "timer prescaler must be non-zero"),
            TimingError::CompareOutOfRange { value } => {
                write!(
                    f,
                    "compare value {} is outside the 8-bit timer range 1..=255",
                    value
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimingError {}

/// Frequency at which the platform fires the tick callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickRate {
    hz: u32,
}

impl TickRate {
    /// The 1 kHz rate the thresholds in [`crate::config`] are tuned for.
    pub const REFERENCE: TickRate = TickRate { hz: TICK_HZ };

    /// Creates a tick rate, rejecting zero.
    pub const fn new(hz: u32) -> Result<Self, TimingError> {
        if hz == 0 {
            return Err(TimingError::ZeroRate);
        }
        Ok(Self { hz })
    }

    /// Ticks per second.
    #[inline]
    pub const fn hz(&self) -> u32 {
        self.hz
    }

    /// Converts a tick count to milliseconds, rounding down.
    pub const fn ticks_to_millis(&self, ticks: u32) -> u64 {
        ticks as u64 * 1_000 / self.hz as u64
    }

    /// Converts milliseconds to a tick count, rounding down.
    ///
    /// Saturates at `u32::MAX`.
    pub const fn millis_to_ticks(&self, millis: u64) -> u32 {
        let ticks = millis.saturating_mul(self.hz as u64) / 1_000;
        if ticks > u32::MAX as u64 {
            u32::MAX
        } else {
            ticks as u32
        }
    }

    /// Hold time before a release counts as momentary, in milliseconds.
    pub const fn momentary_delay_millis(&self) -> u64 {
        self.ticks_to_millis(MOMENTARY_DELAY as u32)
    }

    /// Width of the latching relay pulse, in milliseconds.
    pub const fn latching_time_millis(&self) -> u64 {
        self.ticks_to_millis(LATCHING_TIME as u32)
    }

    /// Compare-match value for an 8-bit clear-on-match timer.
    ///
    /// `clock_hz / prescaler / hz`, truncated. A 1 MHz clock with a prescaler
    /// of 64 gives 15 for the reference rate.
    ///
    /// # Returns
    /// * `Ok(value)` - Value to load into the compare register
    /// * `Err` - Zero prescaler, or the value rounds to 0 or exceeds 255
    pub const fn timer_compare(&self, clock_hz: u32, prescaler: u32) -> Result<u8, TimingError> {
        if prescaler == 0 {
            return Err(TimingError::ZeroPrescaler);
        }

        let value = clock_hz / prescaler / self.hz;
        if value == 0 || value > u8::MAX as u32 {
            return Err(TimingError::CompareOutOfRange { value });
        }
        Ok(value as u8)
    }
}

impl Default for TickRate {
    fn default() -> Self {
        Self::REFERENCE
    }
}
