#![no_std]
#![no_main]

use core::sync::atomic::{AtomicBool, Ordering};

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m_rt::{entry, exception};
use footswitch_relay::{
    RelayOutputs, Renderer, SharedContext, SwitchInput, TickHandler, TickRate,
};
use panic_halt as _;

const CORE_CLOCK_HZ: u32 = 8_000_000;

static CONTEXT: SharedContext = SharedContext::new();

// Pull-up keeps the line high until the switch shorts it to ground
static SWITCH_LINE: AtomicBool = AtomicBool::new(true);

// ============================================================================
// Minimal Switch Implementation
// ============================================================================

pub struct MinimalSwitch;

impl SwitchInput for MinimalSwitch {
    fn is_pressed(&mut self) -> bool {
        !core::hint::black_box(SWITCH_LINE.load(Ordering::Relaxed))
    }
}

// ============================================================================
// Minimal Outputs Implementation
// ============================================================================

/// Zero-size outputs for measuring library overhead
pub struct MinimalOutputs;

impl RelayOutputs for MinimalOutputs {
    fn set_active_high_relay(&mut self, on: bool) {
        core::hint::black_box(on);
    }

    fn set_active_low_relay(&mut self, on: bool) {
        core::hint::black_box(on);
    }

    fn set_latching_pulse(&mut self, on: bool) {
        core::hint::black_box(on);
    }

    fn set_static_led(&mut self, on: bool) {
        core::hint::black_box(on);
    }

    fn set_led_duty(&mut self, duty: u8) {
        core::hint::black_box(duty);
    }
}

// ============================================================================
// Tick and Render Contexts
// ============================================================================

#[entry]
fn main() -> ! {
    let mut core = cortex_m::Peripherals::take().unwrap();

    let reload = CORE_CLOCK_HZ / TickRate::REFERENCE.hz() - 1;
    core.SYST.set_clock_source(SystClkSource::Core);
    core.SYST.set_reload(reload);
    core.SYST.clear_current();
    core.SYST.enable_counter();
    core.SYST.enable_interrupt();

    let mut renderer = Renderer::new(&CONTEXT, MinimalOutputs);
    loop {
        core::hint::black_box(renderer.render());
    }
}

#[exception]
fn SysTick() {
    static mut HANDLER: TickHandler<'static> = TickHandler::new(&CONTEXT);
    static mut SWITCH: MinimalSwitch = MinimalSwitch;

    core::hint::black_box(HANDLER.poll(SWITCH));
}
