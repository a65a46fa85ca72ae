#![cfg_attr(not(feature = "std"), no_std)]

//! Tick-driven footswitch controller for relay bypass pedals.
//!
//! One switch toggles the pedal on and off. Holding the switch past the
//! momentary threshold turns the press into a momentary one: releasing it
//! drops the pedal back to bypass. Each change fires a short pulse for a
//! latching relay, and the status LED shimmers while the switch is held.
//!
//! # Core Concepts
//!
//! - **`Controller`**: The per-tick state machine (edges, hold timing, latching pulse)
//! - **`BrightnessRamp`**: Triangle wave driving the LED shimmer
//! - **`TickHandler`**: Runs both once per tick and publishes the result
//! - **`SharedContext`**: Lock-free state shared with the background render loop
//! - **`Renderer`**: Maps the published state onto the outputs
//! - **`SwitchInput`** / **`RelayOutputs`**: Traits to implement for your hardware
//! - **`TickRate`**: Converts tick counts to wall-clock time and timer settings
//!
//! # Usage
//!
//! ```
//! use footswitch_relay::{RelayOutputs, Renderer, SharedContext, TickHandler};
//!
//! struct Board;
//!
//! impl RelayOutputs for Board {
//!     fn set_active_high_relay(&mut self, _on: bool) {}
//!     fn set_active_low_relay(&mut self, _on: bool) {}
//!     fn set_latching_pulse(&mut self, _on: bool) {}
//!     fn set_static_led(&mut self, _on: bool) {}
//!     fn set_led_duty(&mut self, _duty: u8) {}
//! }
//!
//! static CONTEXT: SharedContext = SharedContext::new();
//!
//! // Timer interrupt, once per millisecond
//! let mut handler = TickHandler::new(&CONTEXT);
//! handler.tick(true);
//!
//! // Background loop
//! let mut renderer = Renderer::new(&CONTEXT, Board);
//! let frame = renderer.render();
//! assert!(frame.active_high_relay);
//! ```

pub mod config;
pub mod controller;
pub mod hal;
pub mod handler;
pub mod ramp;
pub mod render;
pub mod shared;
pub mod state;
pub mod timing;

pub use controller::Controller;
pub use hal::{ActiveLowSwitch, HalOutputs};
pub use handler::{SwitchInput, TickHandler};
pub use ramp::{BrightnessRamp, RampDirection};
pub use render::{OutputFrame, RelayOutputs, Renderer};
pub use shared::{SharedContext, StateView};
pub use state::{ControllerState, Transition};
pub use timing::{TickRate, TimingError};
