//! Context shared between the tick handler and the render loop.
//!
//! The tick handler is the only writer; the render loop only reads. Fields are
//! independent atomics accessed with `Relaxed` loads and stores, so a reader can
//! observe a mix of two consecutive ticks; the next render pass corrects it.
//! Only plain loads and stores are used, so the context works on cores without
//! compare-and-swap.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::config::BRIGHTNESS_MIN;

/// Published controller output, read field by field by the renderer.
///
/// `new` is `const`, so the context can live in a `static`:
///
/// ```
/// use footswitch_relay::SharedContext;
///
/// static CONTEXT: SharedContext = SharedContext::new();
/// assert!(!CONTEXT.pedal_on());
/// ```
#[derive(Debug)]
pub struct SharedContext {
    pedal_on: AtomicBool,
    switch_held: AtomicBool,
    pulse_counter: AtomicU8,
    brightness: AtomicU8,
}

impl SharedContext {
    /// Creates a context matching a freshly reset controller.
    pub const fn new() -> Self {
        Self {
            pedal_on: AtomicBool::new(false),
            switch_held: AtomicBool::new(false),
            pulse_counter: AtomicU8::new(0),
            brightness: AtomicU8::new(BRIGHTNESS_MIN),
        }
    }

    /// Returns true if the pedal is engaged.
    #[inline]
    pub fn pedal_on(&self) -> bool {
        self.pedal_on.load(Ordering::Relaxed)
    }

    /// Returns true if the switch read pressed on the last tick.
    #[inline]
    pub fn switch_held(&self) -> bool {
        self.switch_held.load(Ordering::Relaxed)
    }

    /// Latching pulse progress; nonzero while the pulse output is asserted.
    #[inline]
    pub fn pulse_counter(&self) -> u8 {
        self.pulse_counter.load(Ordering::Relaxed)
    }

    /// Current shimmer brightness.
    #[inline]
    pub fn brightness(&self) -> u8 {
        self.brightness.load(Ordering::Relaxed)
    }

    pub(crate) fn publish(&self, pedal_on: bool, switch_held: bool, pulse_counter: u8, brightness: u8) {
        self.pedal_on.store(pedal_on, Ordering::Relaxed);
        self.switch_held.store(switch_held, Ordering::Relaxed);
        self.pulse_counter.store(pulse_counter, Ordering::Relaxed);
        self.brightness.store(brightness, Ordering::Relaxed);
    }
}

impl Default for SharedContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of the published state.
///
/// Implemented by [`SharedContext`]; the renderer only needs this much, which
/// also lets a plain snapshot stand in for the context.
pub trait StateView {
    /// Returns true if the pedal is engaged.
    fn pedal_on(&self) -> bool;

    /// Returns true if the switch is currently held.
    fn switch_held(&self) -> bool;

    /// Latching pulse progress.
    fn pulse_counter(&self) -> u8;

    /// Current shimmer brightness.
    fn brightness(&self) -> u8;
}

impl StateView for SharedContext {
    fn pedal_on(&self) -> bool {
        SharedContext::pedal_on(self)
    }

    fn switch_held(&self) -> bool {
        SharedContext::switch_held(self)
    }

    fn pulse_counter(&self) -> u8 {
        SharedContext::pulse_counter(self)
    }

    fn brightness(&self) -> u8 {
        SharedContext::brightness(self)
    }
}
