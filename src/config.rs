//! Compile-time thresholds.
//!
//! Every duration here is a tick count, not a wall-clock unit. The real-world
//! timing scales with the platform's tick rate; [`TICK_HZ`] is the reference
//! rate the values were tuned for. See [`crate::timing`] for conversions.

/// Reference tick frequency in Hz (1 ms period).
pub const TICK_HZ: u32 = 1_000;

/// Ticks a press must be held before its release forces the pedal off.
pub const MOMENTARY_DELAY: u16 = 400;

/// Ticks the latching relay pulse stays asserted after each transition.
pub const LATCHING_TIME: u8 = 3;

/// Lower turning point of the shimmer ramp.
pub const BRIGHTNESS_MIN: u8 = 10;

/// Upper turning point of the shimmer ramp.
pub const BRIGHTNESS_MAX: u8 = 254;

/// Duty cycle of the status LED while engaged and not held.
pub const LED_FULL_DUTY: u8 = 255;

/// Duty cycle of the status LED while bypassed.
pub const LED_OFF_DUTY: u8 = 0;

/// Ticks in one full shimmer period (up and back down).
pub const SHIMMER_PERIOD: u16 = 2 * (BRIGHTNESS_MAX as u16 - BRIGHTNESS_MIN as u16);
